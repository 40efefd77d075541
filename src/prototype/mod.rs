//! # Prototype
//!
//! Copy an existing object and customise the copy instead of building from
//! scratch. Copies must be deep.
//!
//! - [`contact`]: deep-cloned contacts and an office prototype factory
//! - [`line`]: explicit deep copy of a line's end points

pub mod contact;
pub mod line;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "prototype-contact",
            Family::Prototype,
            "Deep copies and an employee prototype factory",
            contact_demo,
        ),
        Showcase::new(
            "prototype-line",
            Family::Prototype,
            "Deep copy of a line's end points",
            line_demo,
        ),
    ]
}

fn contact_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use contact::{Address, Contact, EmployeeFactory};

    let john = Contact::new("John Doe", Address::new("123 East Drive", "London", 123));
    let mut jane = john.clone();
    jane.name = "Jane Smith".to_string();
    jane.address.suite = 103;

    Ok(vec![
        john.to_string(),
        jane.to_string(),
        EmployeeFactory::new_main_office_employee("John Smith", 123).to_string(),
        EmployeeFactory::new_auxiliary_office_employee("Jane Derp", 401).to_string(),
    ])
}

fn line_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use line::{Line, Point};

    let original = Line::new(Point::new(0, 0), Point::new(1, 1));
    let mut copy = original.deep_copy();
    copy.start.x = 1;
    Ok(vec![
        format!("original: {:?} -> {:?}", original.start, original.end),
        format!("copy:     {:?} -> {:?}", copy.start, copy.end),
    ])
}
