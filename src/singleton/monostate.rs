//! Monostate: ordinary-looking instances whose state is secretly shared.

use std::sync::atomic::{AtomicU32, Ordering};

static PRINTER_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Printer
    }

    pub fn get_id(&self) -> u32 {
        PRINTER_ID.load(Ordering::Relaxed)
    }

    pub fn set_id(&self, id: u32) {
        PRINTER_ID.store(id, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_share_id() {
        let p1 = Printer::new();
        let p2 = Printer::new();
        p1.set_id(42);
        assert_eq!(p2.get_id(), 42);
    }
}
