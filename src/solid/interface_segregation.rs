use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub content: String,
    pub history: Vec<String>,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Document {
            content: content.into(),
            history: Vec::new(),
        }
    }
}

// =============================================================================
// The fat interface
// =============================================================================

/// One trait for every capability. Devices that cannot do everything have to
/// fail at runtime.
pub trait AllInOne {
    fn print(&self, doc: &mut Document) -> Result<()>;
    fn scan(&self, doc: &mut Document) -> Result<()>;
    fn fax(&self, doc: &mut Document) -> Result<()>;
}

pub struct ScannerOnlyMachine;

impl AllInOne for ScannerOnlyMachine {
    fn print(&self, _doc: &mut Document) -> Result<()> {
        Err(PatternError::Unsupported { operation: "print" })
    }

    fn scan(&self, doc: &mut Document) -> Result<()> {
        doc.history.push("scanned".to_string());
        Ok(())
    }

    fn fax(&self, _doc: &mut Document) -> Result<()> {
        Err(PatternError::Unsupported { operation: "fax" })
    }
}

// =============================================================================
// Segregated interfaces
// =============================================================================

pub trait Printer {
    fn print(&self, doc: &mut Document);
}

pub trait Scanner {
    fn scan(&self, doc: &mut Document);
}

pub trait Fax {
    fn fax(&self, doc: &mut Document);
}

pub struct MultiFunctionDevice;

impl Printer for MultiFunctionDevice {
    fn print(&self, doc: &mut Document) {
        doc.history.push("printed".to_string());
    }
}

impl Scanner for MultiFunctionDevice {
    fn scan(&self, doc: &mut Document) {
        doc.history.push("scanned".to_string());
    }
}

impl Fax for MultiFunctionDevice {
    fn fax(&self, doc: &mut Document) {
        doc.history.push("faxed".to_string());
    }
}

pub struct PhotoScanner;

impl Scanner for PhotoScanner {
    fn scan(&self, doc: &mut Document) {
        doc.history.push("photo-scanned".to_string());
    }
}

pub struct LaserPrinter;

impl Printer for LaserPrinter {
    fn print(&self, doc: &mut Document) {
        doc.history.push("laser-printed".to_string());
    }
}

/// A printer-scanner assembled from separate parts; every call is
/// forwarded.
pub struct Machine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> Machine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Machine { printer, scanner }
    }
}

impl<P: Printer, S> Printer for Machine<P, S> {
    fn print(&self, doc: &mut Document) {
        self.printer.print(doc);
    }
}

impl<P, S: Scanner> Scanner for Machine<P, S> {
    fn scan(&self, doc: &mut Document) {
        self.scanner.scan(doc);
    }
}
