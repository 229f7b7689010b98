//! chex-match: approximate substring matching for the chex record store
//!
//! The record store hands this crate a `(text, pattern, ratio)` triple and
//! gets back the earliest run of the text whose edit distance to the
//! pattern fits the error budget the ratio derives to. The scan is a
//! bit-parallel Shift-Or with up to `k` errors (Wu/Manber-style): one
//! cleared bit per viable pattern prefix, one word per error level, one
//! pass over the text.
//!
//! Table bookkeeping, record storage and message dispatch live in the
//! calling layer; nothing here persists between calls.

pub mod error;
pub mod search;
pub mod text;

pub use error::MatchError;
pub use search::{error_budget, search, search_with_budget, Match, MAX_PATTERN_LEN};
pub use text::standardize;
