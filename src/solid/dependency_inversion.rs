#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { name: name.into() }
    }
}

/// The abstraction both sides depend on.
pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person>;
}

/// Low-level storage. Its layout is private to this module.
#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn add_siblings(&mut self, first: &Person, second: &Person) {
        self.relations
            .push((first.clone(), Relationship::Sibling, second.clone()));
        self.relations
            .push((second.clone(), Relationship::Sibling, first.clone()));
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.relations
            .iter()
            .filter(|(first, rel, _)| first.name == name && *rel == Relationship::Parent)
            .map(|(_, _, second)| second.clone())
            .collect()
    }
}

/// High-level module; sees only the browser.
pub struct Research {
    findings: Vec<String>,
}

impl Research {
    pub fn new(browser: &dyn RelationshipBrowser, parent: &str) -> Self {
        let findings = browser
            .find_all_children_of(parent)
            .into_iter()
            .map(|child| format!("{parent} has a child called {}", child.name))
            .collect();
        Research { findings }
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }
}
