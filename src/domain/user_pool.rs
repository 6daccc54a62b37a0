//! Fixed pool of synthetic users
//!
//! The pool is seeded once and never grows or shrinks. Users are dispensed
//! round-robin from an ordered list, so draws are deterministic for a given
//! seeding and every user is handed out equally often over a full cycle.

use std::collections::HashSet;

use crate::domain::{config_types::SeedCount, provider::FakeDataProvider, user::User};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPool {
    users: Vec<User>,
    cursor: usize,
}

impl UserPool {
    /// Seeds `seed_count` users drawn from `provider`
    ///
    /// A user whose anonymous id collides with an already pooled user is
    /// dropped, so the pool may hold fewer than `seed_count` users.
    pub fn initialize<P>(seed_count: SeedCount, provider: &mut P) -> Result<Self>
    where
        P: FakeDataProvider + ?Sized,
    {
        let count = seed_count.into_inner();
        let mut users = Vec::with_capacity(count);
        for _ in 0..count {
            users.push(User::generate(provider)?);
        }
        Ok(Self::from_users(users))
    }

    /// Builds a pool from known users, keeping the first of any duplicate ids
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut seen = HashSet::new();
        let users = users
            .into_iter()
            .filter(|user| seen.insert(user.anonymous_id()))
            .collect();
        Self { users, cursor: 0 }
    }

    /// Dispenses the next user, cycling through the pool without depleting it
    pub fn next_user(&mut self) -> Result<User> {
        let user = self.users.get(self.cursor).cloned().ok_or(Error::EmptyPool)?;
        self.cursor = (self.cursor + 1) % self.users.len();
        Ok(user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, user: &User) -> bool {
        self.users.contains(user)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}
