//! # mapscore-storage
//!
//! SQLite persistence for the map score recompute job.
//! Opens an existing store, applies the durability pragmas, reads the id
//! list and writes staged score updates in one transaction.

pub mod batch;
pub mod connection;
pub mod engine;
pub mod pragmas;
pub mod queries;

pub use batch::BatchWriter;
pub use connection::DatabaseManager;
pub use engine::MapStorageEngine;
