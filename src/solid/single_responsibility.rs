use crate::error::{PatternError, Result};
use std::fs;
use std::path::Path;

/// Keeps entries and nothing else; persistence lives in
/// [`PersistenceManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    pub title: String,
    entries: Vec<String>,
}

impl Journal {
    pub fn new(title: impl Into<String>) -> Self {
        Journal {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: &str) {
        let number = self.entries.len() + 1;
        self.entries.push(format!("{number}: {entry}"));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

pub struct PersistenceManager;

impl PersistenceManager {
    pub fn render(journal: &Journal) -> String {
        let mut out = String::with_capacity(journal.title.len() + 1);
        out.push_str(&journal.title);
        out.push('\n');
        for entry in journal.entries() {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    pub fn save(journal: &Journal, path: &Path) -> Result<()> {
        fs::write(path, Self::render(journal)).map_err(|err| PatternError::io(path, err))?;
        tracing::info!(path = %path.display(), entries = journal.entries().len(), "journal saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_numbered_per_journal() {
        let mut diary = Journal::new("Dear diary");
        diary.add_entry("I ate a bug");
        diary.add_entry("I cried today");

        let mut other = Journal::new("Work log");
        other.add_entry("Shipped it");

        assert_eq!(diary.entries(), ["1: I ate a bug", "2: I cried today"]);
        assert_eq!(other.entries(), ["1: Shipped it"]);
    }

    #[test]
    fn test_save_writes_title_then_entries() {
        let mut diary = Journal::new("Dear diary");
        diary.add_entry("I ate a bug");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.txt");
        PersistenceManager::save(&diary, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Dear diary\n1: I ate a bug\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let diary = Journal::new("Lost");
        let result = PersistenceManager::save(&diary, Path::new("/no/such/dir/diary.txt"));
        assert!(matches!(result, Err(PatternError::Io { .. })));
    }
}
