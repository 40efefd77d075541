//! Wrapping a callable so every call is logged on the way in and out.

pub struct Logger<F> {
    name: String,
    func: F,
    trail: Vec<String>,
}

impl<F> Logger<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Logger {
            name: name.into(),
            func,
            trail: Vec::new(),
        }
    }

    /// Calls the wrapped function with `args`, which is a tuple when the
    /// function takes several values.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        tracing::debug!(function = %self.name, "entering");
        self.trail.push(format!("Entering {}", self.name));
        let result = (self.func)(args);
        self.trail.push(format!("Exiting {}", self.name));
        tracing::debug!(function = %self.name, "exiting");
        result
    }

    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_result_and_records() {
        let mut add = Logger::new("Add", |(a, b): (f64, f64)| a + b);
        assert_eq!(add.call((1.0, 2.0)), 3.0);
        assert_eq!(add.trail(), ["Entering Add", "Exiting Add"]);
    }

    #[test]
    fn test_stateful_callee() {
        let mut calls = 0;
        let mut counter = Logger::new("Counter", |()| {
            calls += 1;
        });
        counter.call(());
        counter.call(());
        assert_eq!(counter.trail().len(), 4);
        drop(counter);
        assert_eq!(calls, 2);
    }
}
