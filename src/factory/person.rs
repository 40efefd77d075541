use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {} name: {}", self.id, self.name)
    }
}

/// Issues ids 0, 1, 2, ... in creation order.
#[derive(Debug, Default)]
pub struct PersonFactory {
    next_id: u32,
}

impl PersonFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_person(&mut self, name: impl Into<String>) -> Person {
        let person = Person {
            id: self.next_id,
            name: name.into(),
        };
        self.next_id += 1;
        person
    }
}
