use lazy_static::lazy_static;

lazy_static! {
    static ref INSTANCE: Singleton = Singleton {
        label: "the one and only",
    };
}

#[derive(Debug)]
pub struct Singleton {
    label: &'static str,
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Checks a factory hands out the same object on every call.
pub struct SingletonTester;

impl SingletonTester {
    pub fn is_singleton<T, F>(factory: F) -> bool
    where
        F: Fn() -> &'static T,
        T: 'static,
    {
        std::ptr::eq(factory(), factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_singleton() {
        assert!(SingletonTester::is_singleton(Singleton::instance));
    }

    #[test]
    fn test_leaking_factory_is_not_singleton() {
        let factory = || -> &'static String { Box::leak(Box::new(String::from("fresh"))) };
        assert!(!SingletonTester::is_singleton(factory));
    }
}
