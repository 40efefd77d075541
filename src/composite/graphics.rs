//! Single shapes and groups of shapes drawn through the same interface.

use itertools::Itertools;

/// Hands out ids starting from 1.
#[derive(Debug, Default)]
pub struct IdGenerator {
    count: usize,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> usize {
        self.count += 1;
        self.count
    }
}

pub trait Drawable {
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    id: usize,
}

impl Circle {
    pub fn new(ids: &mut IdGenerator) -> Self {
        Circle { id: ids.next_id() }
    }
}

impl Drawable for Circle {
    fn draw(&self) -> String {
        format!("Circle{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    id: usize,
}

impl Triangle {
    pub fn new(ids: &mut IdGenerator) -> Self {
        Triangle { id: ids.next_id() }
    }
}

impl Drawable for Triangle {
    fn draw(&self) -> String {
        format!("Triangle{}", self.id)
    }
}

pub struct Group {
    pub name: String,
    objects: Vec<Box<dyn Drawable>>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, object: impl Drawable + 'static) -> Self {
        self.push(object);
        self
    }

    pub fn push(&mut self, object: impl Drawable + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Drawable for Group {
    fn draw(&self) -> String {
        format!("{}[{}]", self.name, self.objects.iter().map(|o| o.draw()).join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_groups() {
        let mut circle_ids = IdGenerator::new();
        let mut triangle_ids = IdGenerator::new();

        let circles = Group::new("CircleGroup")
            .with(Circle::new(&mut circle_ids))
            .with(Circle::new(&mut circle_ids));
        let root = Group::new("RootGroup")
            .with(circles)
            .with(Triangle::new(&mut triangle_ids));

        assert_eq!(root.draw(), "RootGroup[CircleGroup[Circle1,Circle2],Triangle1]");
    }

    #[test]
    fn test_empty_group() {
        let group = Group::new("Empty");
        assert!(group.is_empty());
        assert_eq!(group.draw(), "Empty[]");
    }
}
