use super::columns::TableLayout;
use crate::core::models::record::DockingRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Defines the interface for reading docking score tables.
///
/// Implementors handle format-specific parsing and validation and report what they
/// read through an associated metadata type.
pub trait ScoreTable {
    /// Information about the read that is not part of the records themselves.
    type Metadata;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads docking records from a reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The source to read from.
    /// * `layout` - Column names and delimiter to use.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is missing, a cell is malformed, or the
    /// underlying reader fails.
    fn read_from(
        reader: &mut impl Read,
        layout: &TableLayout,
    ) -> Result<(Vec<DockingRecord>, Self::Metadata), Self::Error>;

    /// Reads docking records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        layout: &TableLayout,
    ) -> Result<(Vec<DockingRecord>, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, layout)
    }
}
