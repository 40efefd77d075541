//! Decorators fixed at compile time. Wrapping by value keeps the inner
//! shape's own methods reachable through `Deref`.

use super::dynamic::{transparency_percent, Shape};
use std::ops::{Deref, DerefMut};

pub struct Coloured<T> {
    inner: T,
    pub colour: String,
}

impl<T: Shape> Coloured<T> {
    pub fn new(colour: impl Into<String>, inner: T) -> Self {
        Coloured {
            inner,
            colour: colour.into(),
        }
    }
}

impl<T: Shape> Shape for Coloured<T> {
    fn describe(&self) -> String {
        format!("{} has the colour {}", self.inner.describe(), self.colour)
    }
}

impl<T> Deref for Coloured<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for Coloured<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

pub struct Transparent<T> {
    inner: T,
    pub transparency: u8,
}

impl<T: Shape> Transparent<T> {
    pub fn new(transparency: u8, inner: T) -> Self {
        Transparent {
            inner,
            transparency,
        }
    }
}

impl<T: Shape> Shape for Transparent<T> {
    fn describe(&self) -> String {
        format!(
            "{} has {}",
            self.inner.describe(),
            transparency_percent(self.transparency)
        )
    }
}

impl<T> Deref for Transparent<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for Transparent<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}
