//! MMORPG-style users whose names are stored as interned keys.

use super::interner::{Interner, Key};
use std::fmt;

/// A user holds keys, never the names themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    first_name: Key,
    last_name: Key,
}

impl User {
    pub fn first_name_key(&self) -> Key {
        self.first_name
    }

    pub fn last_name_key(&self) -> Key {
        self.last_name
    }
}

/// Owns the name table and hands out users that point into it.
#[derive(Debug, Default)]
pub struct UserDirectory {
    names: Interner,
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, first_name: &str, last_name: &str) -> User {
        let user = User {
            first_name: self.names.intern(first_name),
            last_name: self.names.intern(last_name),
        };
        self.users.push(user);
        user
    }

    pub fn first_name(&self, user: &User) -> &str {
        self.names.resolve(user.first_name).unwrap_or_default()
    }

    pub fn last_name(&self, user: &User) -> &str {
        self.names.resolve(user.last_name).unwrap_or_default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of distinct names actually stored.
    pub fn distinct_names(&self) -> usize {
        self.names.len()
    }

    pub fn display<'a>(&'a self, user: &'a User) -> UserDisplay<'a> {
        UserDisplay {
            directory: self,
            user,
        }
    }
}

pub struct UserDisplay<'a> {
    directory: &'a UserDirectory,
    user: &'a User,
}

impl fmt::Display for UserDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first_name: {} ({}),  last_name: {} ({})",
            self.directory.first_name(self.user),
            self.user.first_name,
            self.directory.last_name(self.user),
            self.user.last_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserDirectory {
        let mut directory = UserDirectory::new();
        directory.add("John", "Smith");
        directory.add("Jane", "Smith");
        directory.add("Jane", "Doe");
        directory.add("Smith", "Smith");
        directory.add("Wilhelmina", "Cunk");
        directory
    }

    #[test]
    fn test_names_are_stored_once() {
        let directory = sample();
        assert_eq!(directory.users().len(), 5);
        // John, Smith, Jane, Doe, Wilhelmina, Cunk
        assert_eq!(directory.distinct_names(), 6);
    }

    #[test]
    fn test_equal_names_share_keys() {
        let directory = sample();
        let users = directory.users();
        assert_eq!(users[0].last_name_key(), users[1].last_name_key());
        assert_eq!(users[1].first_name_key(), users[2].first_name_key());
        // A first name and a last name with the same text share one key too.
        assert_eq!(users[3].first_name_key(), users[3].last_name_key());
    }

    #[test]
    fn test_display_format() {
        let directory = sample();
        let john = directory.users()[0];
        assert_eq!(
            directory.display(&john).to_string(),
            "first_name: John (1),  last_name: Smith (2)"
        );

        let cunk = directory.users()[4];
        assert_eq!(
            directory.display(&cunk).to_string(),
            "first_name: Wilhelmina (5),  last_name: Cunk (6)"
        );
    }
}
