// Reusable library API — shared by the CLI binary and integration tests
pub mod clue;
pub mod errors;
pub mod fill;
pub mod generator;
pub mod grid;
pub mod lexicon;
pub mod logging;
pub mod numbering;
pub mod placer;
pub mod slots;
pub mod svg;
pub mod template;
pub mod word_bank;
