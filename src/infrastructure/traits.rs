//! Where stock and order files come from.

use std::io;
use std::path::Path;

/// Source of stock/order file contents, swappable for an in-memory map in tests.
pub trait StockReader: Send + Sync {
    /// Whole file as UTF-8 text.
    fn read(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;
}

/// Reads from the local disk.
#[derive(Debug, Default)]
pub struct DiskReader;

impl StockReader for DiskReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
