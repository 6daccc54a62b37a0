use crate::domain::provider::ProviderError;
use thiserror::Error;

/// Synthetic event generator error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("user pool is empty")]
    EmptyPool,

    #[error("no candidates to choose {field} from")]
    EmptyChoiceSet { field: &'static str },

    #[error("Fake data provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_input_errors_describe_themselves() {
        assert_eq!(Error::EmptyPool.to_string(), "user pool is empty");
        assert_eq!(
            Error::EmptyChoiceSet { field: "page_url" }.to_string(),
            "no candidates to choose page_url from"
        );
    }

    #[test]
    fn provider_errors_convert_unchanged() {
        let source = ProviderError::unavailable("uuid", "exhausted");
        let err: Error = source.clone().into();
        assert!(matches!(err, Error::Provider(inner) if inner == source));
    }
}
