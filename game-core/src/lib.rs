pub mod evaluation;
pub mod rules;
pub mod word_bank;

// Re-export main components
pub use evaluation::*;
pub use rules::*;
pub use word_bank::*;
