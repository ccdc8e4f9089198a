pub mod oracle;
pub mod store;

pub use oracle::IScoringOracle;
pub use store::{IMapScoreStore, WriteStats};
