//! Defaults shared by the document source and the command line

// === Document Source ===
pub const DEFAULT_EXTENSIONS: &[&str] = &["md"];
pub const DIR_ENV: &str = "NOTE_SIMILARITY_DIR";

// === Report ===
pub const DEFAULT_TOP: usize = 10;
/// Widest matrix rendered as a table in the terminal
pub const MAX_TABLE_COLUMNS: usize = 12;
pub const LABEL_WIDTH: usize = 24;
