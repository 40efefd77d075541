//! Filtering that is open for extension: new criteria are new
//! [`Specification`] types, and the filter itself never changes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub colour: Colour,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, colour: Colour, size: Size) -> Self {
        Product {
            name: name.into(),
            colour,
            size,
        }
    }
}

pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;

    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification {
            first: self,
            second: other,
        }
    }

    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification {
            first: self,
            second: other,
        }
    }
}

pub struct ColourSpecification(pub Colour);

impl Specification<Product> for ColourSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.colour == self.0
    }
}

pub struct SizeSpecification(pub Size);

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Specification<T> for OrSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

pub trait Filter<T> {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

pub struct BetterFilter;

impl Filter<Product> for BetterFilter {
    fn filter<'a>(&self, items: &'a [Product], spec: &dyn Specification<Product>) -> Vec<&'a Product> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new("Apple", Colour::Green, Size::Small),
            Product::new("Tree", Colour::Green, Size::Large),
            Product::new("House", Colour::Blue, Size::Large),
        ]
    }

    fn names(found: Vec<&Product>) -> Vec<&str> {
        found.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_single_criterion() {
        let items = products();
        let green = BetterFilter.filter(&items, &ColourSpecification(Colour::Green));
        assert_eq!(names(green), ["Apple", "Tree"]);
    }

    #[test]
    fn test_and_combinator() {
        let items = products();
        let spec = ColourSpecification(Colour::Green).and(SizeSpecification(Size::Large));
        assert_eq!(names(BetterFilter.filter(&items, &spec)), ["Tree"]);
    }

    #[test]
    fn test_or_combinator() {
        let items = products();
        let spec = ColourSpecification(Colour::Blue).or(SizeSpecification(Size::Small));
        assert_eq!(names(BetterFilter.filter(&items, &spec)), ["Apple", "House"]);
    }

    #[test]
    fn test_nothing_matches() {
        let items = products();
        let spec = ColourSpecification(Colour::Red).and(SizeSpecification(Size::Medium));
        assert!(BetterFilter.filter(&items, &spec).is_empty());
    }
}
