//! Pimpl: the public type forwards to a private implementation it owns, so
//! its internals can change without touching its surface.

mod imp {
    pub(super) struct PersonImpl;

    impl PersonImpl {
        pub(super) fn greet(&self, name: &str) -> String {
            format!("Hello. My name is {name}.")
        }
    }
}

pub struct Person {
    pub name: String,
    imp: Box<imp::PersonImpl>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            imp: Box::new(imp::PersonImpl),
        }
    }

    pub fn greet(&self) -> String {
        self.imp.greet(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(Person::new("Sebastian").greet(), "Hello. My name is Sebastian.");
    }
}
