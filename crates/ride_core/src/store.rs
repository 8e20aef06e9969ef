//! Append-only durable sinks for completed rides.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::StoreError;
use crate::ride::Ride;

/// File name used when no path is configured.
pub const DEFAULT_RIDES_FILE: &str = "rides.txt";

/// Somewhere completed rides are appended to. Records are never rewritten.
pub trait RideStore {
    fn append(&mut self, ride: &Ride) -> Result<(), StoreError>;
}

/// One comma-separated line per ride, appended to a flat file.
///
/// The file is opened in append mode for every write and closed again
/// afterwards. Fields are written verbatim: no header, no quoting, no
/// escaping of embedded commas.
#[derive(Debug, Clone)]
pub struct FileRideStore {
    path: PathBuf,
}

impl FileRideStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileRideStore {
    fn default() -> Self {
        Self::new(DEFAULT_RIDES_FILE)
    }
}

impl RideStore for FileRideStore {
    fn append(&mut self, ride: &Ride) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        wtr.write_record(ride.to_record())?;
        wtr.flush()?;
        Ok(())
    }
}

/// Keeps appended rides in memory. Used by tests and embedders that do not
/// want a file on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryRideStore {
    rides: Vec<Ride>,
}

impl MemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Rides rendered exactly as [`FileRideStore`] would write them.
    pub fn lines(&self) -> Vec<String> {
        self.rides
            .iter()
            .map(|ride| ride.to_record().join(","))
            .collect()
    }
}

impl RideStore for MemoryRideStore {
    fn append(&mut self, ride: &Ride) -> Result<(), StoreError> {
        self.rides.push(ride.clone());
        Ok(())
    }
}
