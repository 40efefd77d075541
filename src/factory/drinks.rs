//! Abstract factories for a family of products (hot drinks), then the same
//! registry built from closures.

use crate::error::{PatternError, Result};
use std::collections::BTreeMap;

pub trait HotDrink {
    fn name(&self) -> &'static str;

    /// Prepares the drink and returns the instructions followed.
    fn prepare(&mut self, volume_ml: u32) -> String;

    /// Volume poured so far; zero until prepared.
    fn volume_ml(&self) -> u32;
}

#[derive(Debug, Default)]
pub struct Tea {
    volume_ml: u32,
}

impl HotDrink for Tea {
    fn name(&self) -> &'static str {
        "tea"
    }

    fn prepare(&mut self, volume_ml: u32) -> String {
        self.volume_ml = volume_ml;
        tracing::debug!(volume_ml, "preparing tea");
        format!("Take tea bag, boil water, pour {volume_ml} mL water, add some lemon.")
    }

    fn volume_ml(&self) -> u32 {
        self.volume_ml
    }
}

#[derive(Debug, Default)]
pub struct Coffee {
    volume_ml: u32,
}

impl HotDrink for Coffee {
    fn name(&self) -> &'static str {
        "coffee"
    }

    fn prepare(&mut self, volume_ml: u32) -> String {
        self.volume_ml = volume_ml;
        tracing::debug!(volume_ml, "preparing coffee");
        format!("Grind some beans, boil water, pour {volume_ml} mL water, add cream, and enjoy.")
    }

    fn volume_ml(&self) -> u32 {
        self.volume_ml
    }
}

/// A drink together with the instructions that produced it.
pub struct Prepared {
    pub drink: Box<dyn HotDrink>,
    pub instructions: String,
}

// =============================================================================
// Abstract factory
// =============================================================================

pub trait HotDrinkFactory {
    fn make(&self) -> Box<dyn HotDrink>;
}

pub struct TeaFactory;

impl HotDrinkFactory for TeaFactory {
    fn make(&self) -> Box<dyn HotDrink> {
        Box::new(Tea::default())
    }
}

pub struct CoffeeFactory;

impl HotDrinkFactory for CoffeeFactory {
    fn make(&self) -> Box<dyn HotDrink> {
        Box::new(Coffee::default())
    }
}

/// Looks factories up by drink name and prepares every drink the same way.
pub struct DrinkFactory {
    factories: BTreeMap<&'static str, Box<dyn HotDrinkFactory>>,
}

impl DrinkFactory {
    pub const VOLUME_ML: u32 = 200;

    pub fn new() -> Self {
        let mut factories: BTreeMap<&'static str, Box<dyn HotDrinkFactory>> = BTreeMap::new();
        factories.insert("coffee", Box::new(CoffeeFactory));
        factories.insert("tea", Box::new(TeaFactory));
        DrinkFactory { factories }
    }

    pub fn make_drink(&self, name: &str) -> Result<Prepared> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| PatternError::UnknownDrink(name.to_string()))?;
        let mut drink = factory.make();
        let instructions = drink.prepare(Self::VOLUME_ML);
        Ok(Prepared {
            drink,
            instructions,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for DrinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Functional factory
// =============================================================================

type DrinkMaker = Box<dyn Fn() -> Prepared>;

/// Same registry, but each entry is a closure that also knows its volume.
pub struct FunctionalDrinkFactory {
    makers: BTreeMap<&'static str, DrinkMaker>,
}

impl FunctionalDrinkFactory {
    pub fn new(tea_volume_ml: u32, coffee_volume_ml: u32) -> Self {
        let mut makers: BTreeMap<&'static str, DrinkMaker> = BTreeMap::new();
        makers.insert(
            "tea",
            Box::new(move || {
                let mut drink = Box::new(Tea::default());
                let instructions = drink.prepare(tea_volume_ml);
                Prepared {
                    drink,
                    instructions,
                }
            }),
        );
        makers.insert(
            "coffee",
            Box::new(move || {
                let mut drink = Box::new(Coffee::default());
                let instructions = drink.prepare(coffee_volume_ml);
                Prepared {
                    drink,
                    instructions,
                }
            }),
        );
        FunctionalDrinkFactory { makers }
    }

    pub fn make_drink(&self, name: &str) -> Result<Prepared> {
        self.makers
            .get(name)
            .map(|make| make())
            .ok_or_else(|| PatternError::UnknownDrink(name.to_string()))
    }
}

/// Without a factory: every caller repeats the branching.
pub fn make_drink_by_branching(name: &str) -> Prepared {
    let mut drink: Box<dyn HotDrink> = if name == "tea" {
        Box::new(Tea::default())
    } else {
        Box::new(Coffee::default())
    };
    let volume = if name == "tea" { 200 } else { 50 };
    let instructions = drink.prepare(volume);
    Prepared {
        drink,
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_factory_prepares_200ml() {
        let factory = DrinkFactory::new();
        let tea = factory.make_drink("tea").unwrap();
        assert_eq!(tea.drink.name(), "tea");
        assert_eq!(tea.drink.volume_ml(), 200);
        assert_eq!(
            tea.instructions,
            "Take tea bag, boil water, pour 200 mL water, add some lemon."
        );

        let coffee = factory.make_drink("coffee").unwrap();
        assert_eq!(coffee.drink.name(), "coffee");
    }

    #[test]
    fn test_unknown_drink() {
        let factory = DrinkFactory::new();
        assert!(matches!(
            factory.make_drink("cocoa"),
            Err(PatternError::UnknownDrink(name)) if name == "cocoa"
        ));
        assert_eq!(factory.names().collect::<Vec<_>>(), ["coffee", "tea"]);
    }

    #[test]
    fn test_functional_factory_uses_volumes() {
        let factory = FunctionalDrinkFactory::new(200, 50);
        let coffee = factory.make_drink("coffee").unwrap();
        assert_eq!(coffee.drink.volume_ml(), 50);
        assert_eq!(
            coffee.instructions,
            "Grind some beans, boil water, pour 50 mL water, add cream, and enjoy."
        );
        assert!(factory.make_drink("mate").is_err());
    }

    #[test]
    fn test_branching_defaults_to_coffee() {
        let drink = make_drink_by_branching("anything");
        assert_eq!(drink.drink.name(), "coffee");
        assert_eq!(drink.drink.volume_ml(), 50);
    }
}
