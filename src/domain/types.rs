//! Field-level domain types for generated records
//!
//! Every free-text or formatted field of a record is a newtype validated at
//! construction, so a record can only ever hold well-formed values no matter
//! which provider produced them.

use nutype::nutype;

/// User agent string attached to a synthetic user
///
/// Limited to 1000 characters, which accommodates real-world browser agents.
#[nutype(
    validate(not_empty, len_char_max = 1000),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct UserAgent(String);

/// IPv4 address in dotted-quad form
#[nutype(
    validate(predicate = |s| s.parse::<std::net::Ipv4Addr>().is_ok()),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct IpAddress(String);

/// Absolute page URL, restricted to the `https` scheme
#[nutype(
    validate(predicate = |s| s.len() > "https://".len() && s.starts_with("https://")),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct PageUrl(String);

/// Human-readable page title
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct PageTitle(String);

/// Relative URL path of a page, without a leading slash (`blog/tags/list`)
#[nutype(
    validate(predicate = |s| !s.is_empty() && !s.starts_with('/')),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct PagePath(String);

/// Name of a tracked custom event: exactly two words separated by a space
#[nutype(
    validate(predicate = |s| s.split(' ').count() == 2 && s.split(' ').all(|token| !token.is_empty())),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct EventName(String);

impl EventName {
    /// The two words making up the name
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        let name: &str = self.as_ref();
        name.split(' ')
    }
}
