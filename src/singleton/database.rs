//! A process-wide capitals database, and why depending on it directly makes
//! for poor tests.
//!
//! The data format is line oriented: a city name on one line, its population
//! on the next, repeated.

use crate::error::{PatternError, Result};
use lazy_static::lazy_static;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUNDLED_CAPITALS: &str = include_str!("../../data/capitals.txt");

pub trait Database {
    fn population(&self, city: &str) -> Option<u64>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapitalsDatabase {
    capitals: BTreeMap<String, u64>,
}

impl CapitalsDatabase {
    pub fn parse(content: &str) -> Result<Self> {
        let mut capitals = BTreeMap::new();
        let mut lines = content.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

        while let Some((_, city)) = lines.next() {
            let Some((index, population)) = lines.next() else {
                return Err(PatternError::malformed(
                    content.lines().count(),
                    format!("city '{}' has no population", city.trim()),
                ));
            };
            let population = population.trim().parse::<u64>().map_err(|err| {
                PatternError::malformed(index + 1, format!("population '{}': {err}", population.trim()))
            })?;
            capitals.insert(city.trim().to_string(), population);
        }

        Ok(CapitalsDatabase { capitals })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| PatternError::io(path, err))?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.capitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capitals.is_empty()
    }
}

impl Database for CapitalsDatabase {
    fn population(&self, city: &str) -> Option<u64> {
        self.capitals.get(city).copied()
    }
}

lazy_static! {
    static ref INSTANCE: CapitalsDatabase = {
        tracing::info!("Initializing database...");
        CapitalsDatabase::parse(BUNDLED_CAPITALS).unwrap_or_else(|err| {
            tracing::error!(%err, "bundled capitals are malformed; starting empty");
            CapitalsDatabase::default()
        })
    };
}

/// Access point for the one shared instance, built on first use.
pub struct SingletonDatabase;

impl SingletonDatabase {
    pub fn get() -> &'static CapitalsDatabase {
        &INSTANCE
    }
}

/// Fixed data that never changes underneath a test.
#[derive(Debug, Clone)]
pub struct DummyDatabase {
    capitals: BTreeMap<&'static str, u64>,
}

impl DummyDatabase {
    pub fn new() -> Self {
        let capitals = [("alpha", 1), ("beta", 2), ("gamma", 3)].into_iter().collect();
        DummyDatabase { capitals }
    }
}

impl Default for DummyDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for DummyDatabase {
    fn population(&self, city: &str) -> Option<u64> {
        self.capitals.get(city).copied()
    }
}

fn total_population<D, S>(db: &D, names: &[S]) -> Result<u64>
where
    D: Database + ?Sized,
    S: AsRef<str>,
{
    names.iter().try_fold(0u64, |total, name| {
        let name = name.as_ref();
        let population = db
            .population(name)
            .ok_or_else(|| PatternError::UnknownCity(name.to_string()))?;
        total
            .checked_add(population)
            .ok_or_else(|| PatternError::PopulationOverflow(name.to_string()))
    })
}

/// Hard-wired to the singleton: every test of this is an integration test.
pub struct SingletonRecordFinder;

impl SingletonRecordFinder {
    pub fn total_population<S: AsRef<str>>(&self, names: &[S]) -> Result<u64> {
        total_population(SingletonDatabase::get(), names)
    }
}

/// Takes whichever database it is given.
pub struct ConfigurableRecordFinder<'a> {
    db: &'a dyn Database,
}

impl<'a> ConfigurableRecordFinder<'a> {
    pub fn new(db: &'a dyn Database) -> Self {
        ConfigurableRecordFinder { db }
    }

    pub fn total_population<S: AsRef<str>>(&self, names: &[S]) -> Result<u64> {
        total_population(self.db, names)
    }
}
