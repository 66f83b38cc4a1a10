//! User directory.

use crate::{Error, Result, User};
use std::collections::HashMap;

/// The set of registered users, in registration order
#[derive(Clone, Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    by_id: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user with no books on loan
    ///
    /// Rejects a blank id or name and ids that are already taken.
    pub fn register(&mut self, name: &str, id: &str) -> Result<&User> {
        let (name, id) = (name.trim(), id.trim());

        if id.is_empty() {
            return Err(Error::InvalidInput("user id must not be empty".into()));
        }
        if name.is_empty() {
            return Err(Error::InvalidInput("user name must not be empty".into()));
        }
        if self.by_id.contains_key(id) {
            tracing::warn!("Rejected duplicate user id {}", id);
            return Err(Error::DuplicateUser(id.to_string()));
        }

        let idx = self.users.len();
        self.users.push(User::new(name, id));
        self.by_id.insert(id.to_string(), idx);

        tracing::info!("Registered user {} ({})", id, name);
        Ok(&self.users[idx])
    }

    /// Look up a user; the id is trimmed the same way as at registration
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.by_id.get(id.trim()).map(|&idx| &self.users[idx])
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        match self.by_id.get(id.trim()) {
            Some(&idx) => self.users.get_mut(idx),
            None => None,
        }
    }

    pub fn list_all(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
