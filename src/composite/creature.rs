//! Abilities stored in an array indexed by an enum, so aggregates are
//! iterator folds that never need touching when an ability is added.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ability {
    Strength,
    Agility,
    Intelligence,
}

impl Ability {
    pub const COUNT: usize = 3;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    abilities: [i32; Ability::COUNT],
}

impl Creature {
    pub fn new(name: impl Into<String>) -> Self {
        Creature {
            name: name.into(),
            abilities: [0; Ability::COUNT],
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.abilities[ability as usize]
    }

    pub fn set(&mut self, ability: Ability, value: i32) {
        self.abilities[ability as usize] = value;
    }

    pub fn sum(&self) -> i32 {
        self.abilities.iter().sum()
    }

    pub fn average(&self) -> f64 {
        f64::from(self.sum()) / Ability::COUNT as f64
    }

    pub fn max(&self) -> i32 {
        self.abilities.iter().copied().max().unwrap_or_default()
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The {} has a strength of {}, an agility of {}, and an intelligence of {}.",
            self.name,
            self.get(Ability::Strength),
            self.get(Ability::Agility),
            self.get(Ability::Intelligence)
        )?;
        write!(
            f,
            "\tThe difficulty level is {}, with avg ability {:.2} and max ability {}.",
            self.sum(),
            self.average(),
            self.max()
        )
    }
}
