//! A property: a field whose reads and writes go through accessors.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Property<T> {
    value: T,
}

impl<T: Copy> Property<T> {
    pub fn new(value: T) -> Self {
        Property { value }
    }

    pub fn get(&self) -> T {
        self.value
    }

    /// Returns the value just stored.
    pub fn set(&mut self, value: T) -> T {
        self.value = value;
        value
    }
}

impl<T: Copy> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Property::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyCreature {
    pub strength: Property<i32>,
    pub agility: Property<i32>,
}

impl PropertyCreature {
    pub fn new(strength: i32, agility: i32) -> Self {
        PropertyCreature {
            strength: strength.into(),
            agility: agility.into(),
        }
    }
}

impl fmt::Display for PropertyCreature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The creature has strength {} and agility {}",
            self.strength, self.agility
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut creature = PropertyCreature::new(10, 10);
        assert_eq!(creature.agility.set(20), 20);
        assert_eq!(creature.agility.get(), 20);
        assert_eq!(creature.strength.get(), 10);
        assert_eq!(creature.to_string(), "The creature has strength 10 and agility 20");
    }
}
