mod string_or_number;
pub use string_or_number::*;
