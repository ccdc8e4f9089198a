//! Scoring oracle adapters.

pub mod oppai;

pub use oppai::OppaiOracle;
