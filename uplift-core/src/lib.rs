//! Core types for uplift.
//!
//! This crate provides the pieces shared by the uplift CLI:
//! - `Quote` and the quote store with its built-in fallback set
//! - the favorites and schedule ledgers
//! - `extract` for pulling work shifts out of pasted schedule emails
//! - `reminder` for the weekly reminder time math

pub mod day;
pub mod error;
pub mod extract;
pub mod favorites;
pub mod quote;
pub mod reminder;
pub mod schedule;
pub mod time;

pub use day::Day;
pub use error::{UpliftError, UpliftResult};
pub use quote::Quote;
pub use time::TimeOfDay;
