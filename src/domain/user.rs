use crate::domain::{
    identifiers::{uuid_from_random_bytes, AnonymousId},
    provider::{FakeDataProvider, ProviderError},
    types::{IpAddress, UserAgent},
};

/// A fabricated identity that events are attributed to
///
/// Users are immutable once created. Events copy the three identity fields
/// by value, so no event aliases the pooled user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    anonymous_id: AnonymousId,
    user_agent: UserAgent,
    ip: IpAddress,
}

impl User {
    pub fn new(anonymous_id: AnonymousId, user_agent: UserAgent, ip: IpAddress) -> Self {
        Self {
            anonymous_id,
            user_agent,
            ip,
        }
    }

    /// Draws a fresh user (id, then user agent, then IP) from `provider`
    pub fn generate<P>(provider: &mut P) -> Result<Self, ProviderError>
    where
        P: FakeDataProvider + ?Sized,
    {
        let anonymous_id = AnonymousId::new(provider.uuid()?);
        let user_agent = UserAgent::try_new(provider.user_agent()?)
            .map_err(|e| ProviderError::invalid_value("user_agent", e))?;
        let ip = IpAddress::try_new(provider.ipv4()?)
            .map_err(|e| ProviderError::invalid_value("ip", e))?;

        Ok(Self::new(anonymous_id, user_agent, ip))
    }

    pub fn anonymous_id(&self) -> AnonymousId {
        self.anonymous_id
    }

    pub fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    pub fn ip(&self) -> &IpAddress {
        &self.ip
    }
}

/// Builds a user from raw parts, minting the id from `id_bytes`
///
/// Handy for fixtures that need a user without going through a provider.
pub fn user_from_parts(
    id_bytes: [u8; 16],
    user_agent: &str,
    ip: &str,
) -> Result<User, ProviderError> {
    let user_agent = UserAgent::try_new(user_agent.to_string())
        .map_err(|e| ProviderError::invalid_value("user_agent", e))?;
    let ip = IpAddress::try_new(ip.to_string()).map_err(|e| ProviderError::invalid_value("ip", e))?;
    Ok(User::new(
        AnonymousId::new(uuid_from_random_bytes(id_bytes)),
        user_agent,
        ip,
    ))
}
