pub mod rows;
pub mod writer;

pub use rows::ScoreUpdateRow;
pub use writer::BatchWriter;
