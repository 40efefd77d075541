use rustc_hash::FxHashSet;
use std::fmt;
use std::rc::Rc;

/// Hands out shared handles: equal strings always come back as the same
/// allocation.
#[derive(Debug, Default)]
pub struct StringPool {
    entries: FxHashSet<Rc<str>>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn share(&mut self, value: &str) -> Rc<str> {
        if let Some(existing) = self.entries.get(value) {
            return Rc::clone(existing);
        }
        let shared: Rc<str> = Rc::from(value);
        self.entries.insert(Rc::clone(&shared));
        shared
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PooledUser {
    pub first_name: Rc<str>,
    pub last_name: Rc<str>,
}

impl PooledUser {
    pub fn new(pool: &mut StringPool, first_name: &str, last_name: &str) -> Self {
        PooledUser {
            first_name: pool.share(first_name),
            last_name: pool.share(last_name),
        }
    }
}

impl fmt::Display for PooledUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
