use design_patterns::catalog::{Catalog, Family};
use design_patterns::config::DemoConfig;
use design_patterns::PatternError;
use std::io::Write;

fn run(name: &str) -> Vec<String> {
    let catalog = Catalog::new();
    catalog.find(name).unwrap().run(&DemoConfig::default()).unwrap()
}

#[test]
fn test_every_showcase_runs_with_defaults() {
    let catalog = Catalog::new();
    let config = DemoConfig::default();
    for showcase in catalog.iter() {
        let lines = showcase
            .run(&config)
            .unwrap_or_else(|err| panic!("{} failed: {err}", showcase.name));
        assert!(!lines.is_empty(), "{} printed nothing", showcase.name);
    }
}

#[test]
fn test_flyweight_users() {
    let lines = run("flyweight-users");
    assert_eq!(lines[0], "User 0: first_name: John (1),  last_name: Smith (2)");
    assert_eq!(lines.last().unwrap(), "5 users share 6 stored names");
}

#[test]
fn test_flyweight_pool_shares_strings() {
    let lines = run("flyweight-pool");
    assert_eq!(lines[0], "User 0: John Smith");
    assert_eq!(lines[1], "User 1: Jane Smith");
    // John vs Jane, then Smith vs Smith.
    assert_eq!(lines[lines.len() - 2], "false");
    assert_eq!(lines[lines.len() - 1], "true");
}

#[test]
fn test_flyweight_text_rendering() {
    assert_eq!(
        run("flyweight-text"),
        vec![
            "This is a BRAVE new world.",
            "This is a REALLY BRAVE new world.",
            "hello WORLD"
        ]
    );
}

#[test]
fn test_singleton_totals() {
    let lines = run("singleton-database");
    assert_eq!(lines[0], "singleton: Seoul + Mexico City = 34900000");
    assert_eq!(lines[1], "dummy: alpha + gamma = 4");
    assert_eq!(lines[2], "configured: Seoul + Mexico City = 34900000");
}

#[test]
fn test_singleton_reads_configured_capitals() {
    let mut capitals = tempfile::NamedTempFile::new().unwrap();
    write!(capitals, "Seoul\n1\nMexico City\n2\n").unwrap();
    let config = DemoConfig {
        capitals_path: Some(capitals.path().to_path_buf()),
        ..DemoConfig::default()
    };

    let lines = Catalog::new().find("singleton-database").unwrap().run(&config).unwrap();
    assert_eq!(lines[2], "configured: Seoul + Mexico City = 3");
}

#[test]
fn test_missing_capitals_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = DemoConfig {
        capitals_path: Some(dir.path().join("missing.txt")),
        ..DemoConfig::default()
    };
    let result = Catalog::new().find("singleton-database").unwrap().run(&config);
    assert!(matches!(result, Err(PatternError::Io { .. })));
}

#[test]
fn test_structural_outputs() {
    assert_eq!(run("adapter-square"), vec!["Area = 25"]);
    assert_eq!(
        run("bridge-renderer"),
        vec![
            "Raster-rendering a circle of radius 5",
            "Raster-rendering a circle of radius 10"
        ]
    );
    assert_eq!(run("bridge-pimpl"), vec!["Hello. My name is Sebastian."]);
    assert_eq!(
        run("composite-graphics"),
        vec!["RootGroup[CircleGroup[Circle1,Circle2],Triangle1]"]
    );
    assert_eq!(run("composite-values"), vec!["sum is: 80"]);
    assert_eq!(run("proxy-ping"), vec!["ping pong"; 3]);
}

#[test]
fn test_decorator_outputs() {
    assert_eq!(
        run("decorator-dynamic"),
        vec![
            "Circle(1)",
            "RedSquare(4)",
            "RedSquare(4) has 78.43% transparency"
        ]
    );
    assert_eq!(
        run("decorator-flower"),
        vec![
            "A rose",
            "A rose that is red",
            "A rose that is red",
            "A rose that is red and blue"
        ]
    );
}

#[test]
fn test_neural_wiring() {
    let lines = run("composite-neural");
    assert_eq!(lines[0], "*** Inputs ***");
    assert_eq!(lines[1], "Neuron1{in[],out[N4,N5,N6,N7]}");
}

#[test]
fn test_dependency_inversion_findings() {
    assert_eq!(
        run("solid-dip"),
        vec!["John has a child called Chris", "John has a child called Matt"]
    );
}

#[test]
fn test_listing_covers_all_families() {
    let catalog = Catalog::new();
    let json: serde_json::Value = serde_json::from_str(&catalog.to_json().unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), catalog.len());
    assert!(entries.iter().any(|entry| entry["family"] == "flyweight"));
    assert!(catalog.by_family(Family::Solid).count() >= 5);
}
