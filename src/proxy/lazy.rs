//! Virtual proxy: looks like a loaded image, loads on first draw.

use std::cell::{Cell, OnceCell};

pub trait Image {
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    filename: String,
}

impl Bitmap {
    pub fn load(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        tracing::info!(%filename, "Loading bitmap");
        Bitmap { filename }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Image for Bitmap {
    fn draw(&self) -> String {
        format!("Drawing bitmap {}", self.filename)
    }
}

#[derive(Debug)]
pub struct LazyBitmap {
    filename: String,
    bitmap: OnceCell<Bitmap>,
    loads: Cell<u32>,
}

impl LazyBitmap {
    pub fn new(filename: impl Into<String>) -> Self {
        LazyBitmap {
            filename: filename.into(),
            bitmap: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.bitmap.get().is_some()
    }

    pub fn load_count(&self) -> u32 {
        self.loads.get()
    }
}

impl Image for LazyBitmap {
    fn draw(&self) -> String {
        self.bitmap
            .get_or_init(|| {
                self.loads.set(self.loads.get() + 1);
                Bitmap::load(self.filename.as_str())
            })
            .draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_on_first_draw_only() {
        let lazy = LazyBitmap::new("lazybitmap.bmp");
        assert!(!lazy.is_loaded());

        assert_eq!(lazy.draw(), "Drawing bitmap lazybitmap.bmp");
        assert_eq!(lazy.draw(), "Drawing bitmap lazybitmap.bmp");
        assert!(lazy.is_loaded());
        assert_eq!(lazy.load_count(), 1);
    }

    #[test]
    fn test_eager_bitmap() {
        let bitmap = Bitmap::load("bitmap.bmp");
        assert_eq!(bitmap.filename(), "bitmap.bmp");
        assert_eq!(bitmap.draw(), "Drawing bitmap bitmap.bmp");
    }
}
