//! Approximate substring search
//!
//! One engine: a bit-parallel Shift-Or scan carrying an error budget
//! ([`bitap`]). Callers reach it through [`search`] with a fuzziness
//! ratio, or [`search_with_budget`] with the budget spelled out.

pub mod bitap;


pub use bitap::{error_budget, search, search_with_budget, Match, MAX_PATTERN_LEN};
