pub mod favorites;
pub mod import;
pub mod quote;
pub mod remind;
pub mod schedule;
