use lazy_static::lazy_static;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub suite: u32,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>, suite: u32) -> Self {
        Address {
            street: street.into(),
            city: city.into(),
            suite,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "street: {} city: {} suite: {}", self.street, self.city, self.suite)
    }
}

/// The address sits behind an owning pointer; `Clone` follows it, so every
/// copy is deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub address: Box<Address>,
}

impl Contact {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Contact {
            name: name.into(),
            address: Box::new(address),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {} address: {}", self.name, self.address)
    }
}

lazy_static! {
    static ref MAIN_OFFICE: Contact = Contact::new("", Address::new("123 Main Road", "London", 0));
    static ref AUXILIARY_OFFICE: Contact =
        Contact::new("", Address::new("321 Auxiliary Ave", "Sheffield", 0));
}

/// Prototype factory: callers never build a contact from scratch, they get a
/// customised copy of one of the office prototypes.
pub struct EmployeeFactory;

impl EmployeeFactory {
    pub fn new_main_office_employee(name: &str, suite: u32) -> Contact {
        Self::new_employee(name, suite, &MAIN_OFFICE)
    }

    pub fn new_auxiliary_office_employee(name: &str, suite: u32) -> Contact {
        Self::new_employee(name, suite, &AUXILIARY_OFFICE)
    }

    fn new_employee(name: &str, suite: u32, prototype: &Contact) -> Contact {
        let mut result = prototype.clone();
        result.name = name.to_string();
        result.address.suite = suite;
        result
    }
}
