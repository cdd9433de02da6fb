//! # Storage Layer
//!
//! This module defines the persistence abstraction for carlot. The [`CarStore`]
//! trait lets the record store work with different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole fleet lives in one flat text file (`cars.txt` by default)
//!   - Every save rewrites the file in full
//!
//! - [`memory::InMemoryStore`]: Storage for testing
//!   - Keeps the encoded text in memory, so it goes through the same codec
//!   - Can be seeded with arbitrary text and told to fail writes
//!
//! ## Storage Format
//!
//! See [`format`]. Only cars are persisted; customers and rentals live in
//! memory for the lifetime of the process.

use crate::error::Result;
use crate::model::Car;

pub mod format;
pub mod fs;
pub mod memory;

/// Abstract interface for car persistence.
pub trait CarStore {
    /// Load every persisted car in file order.
    ///
    /// A store that has never been written yields an empty list. Any decode
    /// failure is an error for the whole load; no partial result is returned.
    fn load(&self) -> Result<Vec<Car>>;

    /// Replace the persisted state with `cars`, in order.
    fn save(&mut self, cars: &[Car]) -> Result<()>;
}
