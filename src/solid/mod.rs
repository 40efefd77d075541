//! # SOLID Principles
//!
//! 1. **Single responsibility**: the journal keeps entries, a separate
//!    manager persists them
//! 2. **Open/closed**: filters extended through specifications
//! 3. **Liskov substitution**: why a square is not a resizable rectangle
//! 4. **Interface segregation**: small capability traits instead of one
//! 5. **Dependency inversion**: high-level research over a browser trait

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov;
pub mod open_closed;
pub mod single_responsibility;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::{PatternError, Result};

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "solid-srp",
            Family::Solid,
            "Journal entries persisted by a separate manager",
            single_responsibility_demo,
        ),
        Showcase::new(
            "solid-ocp",
            Family::Solid,
            "Product filtering through composable specifications",
            open_closed_demo,
        ),
        Showcase::new(
            "solid-lsp",
            Family::Solid,
            "Rectangle and square under the same resize contract",
            liskov_demo,
        ),
        Showcase::new(
            "solid-isp",
            Family::Solid,
            "Fat device interface versus segregated capabilities",
            interface_segregation_demo,
        ),
        Showcase::new(
            "solid-dip",
            Family::Solid,
            "Research that depends on a relationship browser",
            dependency_inversion_demo,
        ),
    ]
}

fn single_responsibility_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use single_responsibility::{Journal, PersistenceManager};

    let mut journal = Journal::new("Dear diary");
    journal.add_entry("I ate a bug");
    journal.add_entry("I cried today");
    Ok(PersistenceManager::render(&journal)
        .lines()
        .map(str::to_string)
        .collect())
}

fn open_closed_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use open_closed::*;

    let items = vec![
        Product::new("Apple", Colour::Green, Size::Small),
        Product::new("Tree", Colour::Green, Size::Large),
        Product::new("House", Colour::Blue, Size::Large),
    ];
    let spec = ColourSpecification(Colour::Green).and(SizeSpecification(Size::Large));
    Ok(BetterFilter
        .filter(&items, &spec)
        .into_iter()
        .map(|item| format!("{} is green and large.", item.name))
        .collect())
}

fn liskov_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use liskov::{process, Rectangle, Resizable, Square};

    let mut shapes: Vec<(&str, Box<dyn Resizable>)> = vec![
        ("Rectangle", Box::new(Rectangle::new(3, 4))),
        ("Square", Box::new(Square::new(5))),
        ("Rectangle::square", Box::new(Rectangle::square(5))),
    ];
    Ok(shapes
        .iter_mut()
        .map(|(label, shape)| {
            let (expected, actual) = process(shape.as_mut());
            format!("{label}: expected area = {expected}, got {actual}")
        })
        .collect())
}

fn interface_segregation_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use interface_segregation::*;

    let mut lines = Vec::new();
    let mut doc = Document::new("quarterly report");

    let fat = ScannerOnlyMachine;
    fat.scan(&mut doc)?;
    match fat.print(&mut doc) {
        Err(err @ PatternError::Unsupported { .. }) => lines.push(format!("fat interface: {err}")),
        other => other?,
    }

    let machine = Machine::new(LaserPrinter, PhotoScanner);
    Scanner::scan(&machine, &mut doc);
    Printer::print(&machine, &mut doc);
    lines.push(format!("history: {}", doc.history.join(", ")));
    Ok(lines)
}

fn dependency_inversion_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use dependency_inversion::{Person, Relationships, Research};

    let parent = Person::new("John");
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &Person::new("Chris"));
    relationships.add_parent_and_child(&parent, &Person::new("Matt"));

    Ok(Research::new(&relationships, &parent.name).findings().to_vec())
}
