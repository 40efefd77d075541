//! Registry of every showcase in the crate.
//!
//! A showcase exercises one module and returns the console lines it would
//! print, which keeps the demonstrations testable.

use crate::config::DemoConfig;
use crate::error::{PatternError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Solid,
    Builder,
    Factory,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Flyweight,
    Proxy,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Solid => "SOLID",
            Family::Builder => "Builder",
            Family::Factory => "Factory",
            Family::Prototype => "Prototype",
            Family::Singleton => "Singleton",
            Family::Adapter => "Adapter",
            Family::Bridge => "Bridge",
            Family::Composite => "Composite",
            Family::Decorator => "Decorator",
            Family::Flyweight => "Flyweight",
            Family::Proxy => "Proxy",
        };
        f.pad(name)
    }
}

pub type Runner = fn(&DemoConfig) -> Result<Vec<String>>;

#[derive(Clone, Serialize)]
pub struct Showcase {
    pub name: &'static str,
    pub family: Family,
    pub summary: &'static str,
    #[serde(skip)]
    runner: Runner,
}

impl Showcase {
    pub fn new(name: &'static str, family: Family, summary: &'static str, runner: Runner) -> Self {
        Showcase {
            name,
            family,
            summary,
            runner,
        }
    }

    pub fn run(&self, config: &DemoConfig) -> Result<Vec<String>> {
        tracing::debug!(showcase = self.name, "running showcase");
        (self.runner)(config)
    }
}

impl fmt::Debug for Showcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Showcase")
            .field("name", &self.name)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

pub struct Catalog {
    showcases: Vec<Showcase>,
}

impl Catalog {
    pub fn new() -> Self {
        let showcases = [
            crate::solid::showcases(),
            crate::builder::showcases(),
            crate::factory::showcases(),
            crate::prototype::showcases(),
            crate::singleton::showcases(),
            crate::adapter::showcases(),
            crate::bridge::showcases(),
            crate::composite::showcases(),
            crate::decorator::showcases(),
            crate::flyweight::showcases(),
            crate::proxy::showcases(),
        ]
        .into_iter()
        .flatten()
        .collect();
        Catalog { showcases }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Showcase> {
        self.showcases.iter()
    }

    pub fn len(&self) -> usize {
        self.showcases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.showcases.is_empty()
    }

    pub fn find(&self, name: &str) -> Result<&Showcase> {
        self.showcases
            .iter()
            .find(|showcase| showcase.name == name)
            .ok_or_else(|| PatternError::UnknownShowcase(name.to_string()))
    }

    pub fn by_family(&self, family: Family) -> impl Iterator<Item = &Showcase> {
        self.showcases.iter().filter(move |showcase| showcase.family == family)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.showcases)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::new();
        let names: HashSet<_> = catalog.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_every_family_is_represented() {
        let catalog = Catalog::new();
        for family in [
            Family::Solid,
            Family::Builder,
            Family::Factory,
            Family::Prototype,
            Family::Singleton,
            Family::Adapter,
            Family::Bridge,
            Family::Composite,
            Family::Decorator,
            Family::Flyweight,
            Family::Proxy,
        ] {
            assert!(catalog.by_family(family).count() > 0, "no showcase for {family}");
        }
    }

    #[test]
    fn test_find_unknown() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.find("visitor"),
            Err(PatternError::UnknownShowcase(name)) if name == "visitor"
        ));
    }

    #[test]
    fn test_json_listing_omits_runner() {
        let json = Catalog::new().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert!(first.get("name").is_some());
        assert!(first.get("family").is_some());
        assert!(first.get("runner").is_none());
    }
}
