pub trait ContainsIntegers {
    fn sum(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleValue(pub i32);

impl ContainsIntegers for SingleValue {
    fn sum(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManyValues {
    values: Vec<i32>,
}

impl ManyValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: i32) {
        self.values.push(value);
    }
}

impl FromIterator<i32> for ManyValues {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        ManyValues {
            values: iter.into_iter().collect(),
        }
    }
}

impl ContainsIntegers for ManyValues {
    fn sum(&self) -> i32 {
        self.values.iter().sum()
    }
}

/// Adds up single values and collections alike.
pub fn sum(items: &[&dyn ContainsIntegers]) -> i32 {
    items.iter().map(|item| item.sum()).sum()
}
