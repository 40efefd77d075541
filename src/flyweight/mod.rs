//! # Flyweight
//!
//! Share storage of repeated data behind lightweight handles.
//!
//! - [`interner`]: bidirectional string table issuing sequential keys
//! - [`user`]: users that store only name keys
//! - [`pool`]: shared `Rc<str>` handles, the ready-made variant
//! - [`text`]: formatting ranges instead of per-character flags
//! - [`sentence`]: word tokens with a capitalisation flag

pub mod interner;
pub mod pool;
pub mod sentence;
pub mod text;
pub mod user;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;
use std::rc::Rc;

pub use interner::{Interner, Key};

const NAMES: [(&str, &str); 5] = [
    ("John", "Smith"),
    ("Jane", "Smith"),
    ("Jane", "Doe"),
    ("Smith", "Smith"),
    ("Wilhelmina", "Cunk"),
];

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "flyweight-users",
            Family::Flyweight,
            "Users storing interned name keys",
            interned_users,
        ),
        Showcase::new(
            "flyweight-pool",
            Family::Flyweight,
            "Shared Rc<str> handles for equal names",
            pooled_users,
        ),
        Showcase::new(
            "flyweight-text",
            Family::Flyweight,
            "Capitalisation ranges and word tokens",
            text_formatting,
        ),
    ]
}

fn interned_users(_config: &DemoConfig) -> Result<Vec<String>> {
    let mut directory = user::UserDirectory::new();
    for (first, last) in NAMES {
        directory.add(first, last);
    }

    let mut lines: Vec<String> = directory
        .users()
        .iter()
        .enumerate()
        .map(|(i, user)| format!("User {i}: {}", directory.display(user)))
        .collect();
    lines.push(format!(
        "{} users share {} stored names",
        directory.users().len(),
        directory.distinct_names()
    ));
    Ok(lines)
}

fn pooled_users(_config: &DemoConfig) -> Result<Vec<String>> {
    let mut names = pool::StringPool::new();
    let users: Vec<_> = NAMES
        .iter()
        .map(|(first, last)| pool::PooledUser::new(&mut names, first, last))
        .collect();

    let mut lines: Vec<String> = users
        .iter()
        .enumerate()
        .map(|(i, user)| format!("User {i}: {user}"))
        .collect();
    lines.push(Rc::ptr_eq(&users[0].first_name, &users[1].first_name).to_string());
    lines.push(Rc::ptr_eq(&users[0].last_name, &users[1].last_name).to_string());
    Ok(lines)
}

fn text_formatting(_config: &DemoConfig) -> Result<Vec<String>> {
    let mut naive = text::FormattedText::new("This is a brave new world.");
    naive.capitalize(10, 15);

    let mut ranged = text::BetterFormattedText::new("This is a really brave new world.");
    ranged.range(10, 21).capitalize = true;

    let mut words = sentence::Sentence::new("hello world");
    if let Some(word) = words.word_mut(1) {
        word.capitalize = true;
    }

    Ok(vec![naive.to_string(), ranged.to_string(), words.render()])
}
