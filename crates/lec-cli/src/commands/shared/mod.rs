pub mod limit;
pub mod outcome;
pub mod parse;
