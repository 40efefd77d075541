//! # Singleton
//!
//! - [`database`]: a lazily built capitals database, plus the injectable
//!   alternative that keeps finders testable
//! - [`monostate`]: many instances, one shared state
//! - [`instance`]: a bare singleton and a tester for it

pub mod database;
pub mod instance;
pub mod monostate;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

const QUERY: [&str; 2] = ["Seoul", "Mexico City"];

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "singleton-database",
            Family::Singleton,
            "Record finders over the singleton and an injected database",
            database_demo,
        ),
        Showcase::new(
            "singleton-monostate",
            Family::Singleton,
            "Printers sharing one id",
            monostate_demo,
        ),
        Showcase::new(
            "singleton-tester",
            Family::Singleton,
            "Checking a factory always returns the same instance",
            tester_demo,
        ),
    ]
}

fn database_demo(config: &DemoConfig) -> Result<Vec<String>> {
    use database::{
        CapitalsDatabase, ConfigurableRecordFinder, DummyDatabase, SingletonDatabase,
        SingletonRecordFinder,
    };

    let mut lines = vec![format!(
        "singleton: {} = {}",
        QUERY.join(" + "),
        SingletonRecordFinder.total_population(&QUERY)?
    )];

    let dummy = DummyDatabase::new();
    lines.push(format!(
        "dummy: alpha + gamma = {}",
        ConfigurableRecordFinder::new(&dummy).total_population(&["alpha", "gamma"])?
    ));

    let loaded;
    let db: &dyn database::Database = match &config.capitals_path {
        Some(path) => {
            loaded = CapitalsDatabase::from_file(path)?;
            &loaded
        }
        None => SingletonDatabase::get(),
    };
    lines.push(format!(
        "configured: {} = {}",
        QUERY.join(" + "),
        ConfigurableRecordFinder::new(db).total_population(&QUERY)?
    ));
    Ok(lines)
}

fn monostate_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use monostate::Printer;

    let p1 = Printer::new();
    let p2 = Printer::new();
    p1.set_id(7);
    Ok(vec![format!("p1 = {}, p2 = {}", p1.get_id(), p2.get_id())])
}

fn tester_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use instance::{Singleton, SingletonTester};

    Ok(vec![format!(
        "{} is singleton: {}",
        Singleton::instance().label(),
        SingletonTester::is_singleton(Singleton::instance)
    )])
}
