pub mod asset;
pub mod mods;
pub mod scoring;
