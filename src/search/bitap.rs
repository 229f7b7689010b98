//! Bit-parallel approximate matching (Shift-Or with k errors)
//!
//! Wu/Manber-style scan: each error level keeps one word whose cleared
//! bit `i` means "the first `i` pattern characters still align here with
//! at most that many errors". Every text character costs one shift/mask
//! update per level, so a whole search is `O(n * k)` word operations with
//! no backtracking and no per-character allocation.

use serde::Serialize;
use tracing::debug;

use crate::error::MatchError;
use crate::text::standardize;

/// Word holding one bit per pattern position plus the terminal bit.
type Mask = u32;

/// Longest supported pattern, in characters after standardization.
///
/// One bit per pattern position plus the terminal bit must fit in a
/// [`Mask`], so the limit is the word width minus one.
pub const MAX_PATTERN_LEN: usize = (Mask::BITS - 1) as usize;

/// Character codes at or above this index share the all-set miss mask.
const MASK_TABLE_LEN: usize = 256;

/// A run of the standardized text that fit the error budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Matched substring of the standardized text.
    pub text: String,
    /// Start of the run, in characters of the standardized text.
    pub start: usize,
    /// End of the run, exclusive.
    pub end: usize,
}

/// Find the earliest run of `text` within edit distance `k` of `pattern`,
/// where `k = m - round(m * ratio)` for pattern length `m`.
///
/// Ratio 1.0 demands an exact occurrence; 0.0 tolerates as many errors as
/// the pattern has characters. Both inputs are standardized first, so
/// matching ignores case, accents and whitespace runs. An empty pattern
/// matches vacuously and yields the standardized text whole; a pattern
/// longer than [`MAX_PATTERN_LEN`] or a ratio outside `0.0..=1.0` is
/// rejected, never silently truncated or clamped.
pub fn search(text: &str, pattern: &str, ratio: f64) -> Result<Option<String>, MatchError> {
    let pattern = standardize(pattern);
    let m = pattern.chars().count();
    if m == 0 {
        return Ok(Some(standardize(text)));
    }
    if m > MAX_PATTERN_LEN {
        return Err(MatchError::PatternTooLong {
            length: m,
            limit: MAX_PATTERN_LEN,
        });
    }
    let k = error_budget(m, ratio)?;
    debug!(pattern_len = m, budget = k, "approximate scan");
    Ok(scan_standardized(&standardize(text), &pattern, k).map(|found| found.text))
}

/// Budget-direct entry: like [`search`] but with the error budget spelled
/// out instead of derived from a ratio.
///
/// Budgets beyond the pattern length are clamped to it, since every window
/// of the pattern's length is already within `m` edits of the pattern.
/// Returns the matched run together with its character range in the
/// standardized text.
pub fn search_with_budget(
    text: &str,
    pattern: &str,
    k: usize,
) -> Result<Option<Match>, MatchError> {
    let pattern = standardize(pattern);
    let m = pattern.chars().count();
    if m == 0 {
        let text = standardize(text);
        let end = text.chars().count();
        return Ok(Some(Match {
            text,
            start: 0,
            end,
        }));
    }
    if m > MAX_PATTERN_LEN {
        return Err(MatchError::PatternTooLong {
            length: m,
            limit: MAX_PATTERN_LEN,
        });
    }
    Ok(scan_standardized(&standardize(text), &pattern, k.min(m)))
}

/// Derive the error budget from a fuzziness ratio.
///
/// Higher ratio means a smaller budget. The store's stored queries rely on
/// this exact mapping, inverted as it reads, so it stays as-is.
pub fn error_budget(pattern_len: usize, ratio: f64) -> Result<usize, MatchError> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(MatchError::RatioOutOfRange(ratio));
    }
    Ok(pattern_len - (pattern_len as f64 * ratio).round() as usize)
}

/// Scan already-standardized text for an already-standardized pattern.
///
/// The text is walked behind one sentinel alignment position so that bit
/// indices line up with 1-based pattern-prefix lengths; the sentinel never
/// appears in the returned run.
fn scan_standardized(text: &str, pattern: &str, k: usize) -> Option<Match> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let m = pattern.len();
    if text.is_empty() || text.len() < m {
        return None;
    }

    let masks = compile_masks(&pattern);
    let mut state = vec![Mask::MAX; k + 1];
    let terminal: Mask = 1 << m;

    for (pos, c) in std::iter::once(' ').chain(text.iter().copied()).enumerate() {
        let mask = mask_for(&masks, c);

        // Each level must combine the previous iteration's words only, so
        // the pre-update value of the level below rotates through prev_low.
        let mut prev_low = state[0];
        state[0] = (state[0] | mask) << 1;
        for d in 1..=k {
            let saved = state[d];
            state[d] = (prev_low & (state[d] | mask)) << 1;
            prev_low = saved;
        }

        if state[k] & terminal == 0 {
            // pos indexes the sentinel-prefixed walk; shifting back by one
            // lands on the standardized text, clamped at its head
            let end = pos;
            let start = (pos + 1).saturating_sub(m).max(1) - 1;
            let matched: String = text[start..end].iter().collect();
            return Some(Match {
                text: matched,
                start,
                end,
            });
        }
    }
    None
}

/// Compile the per-character mask table: bit `i` is cleared exactly where
/// the pattern character at position `i` carries that code.
fn compile_masks(pattern: &[char]) -> [Mask; MASK_TABLE_LEN] {
    let mut masks = [Mask::MAX; MASK_TABLE_LEN];
    for (i, &c) in pattern.iter().enumerate() {
        if let Some(entry) = masks.get_mut(c as usize) {
            *entry &= !(1 << i);
        }
    }
    masks
}

fn mask_for(masks: &[Mask; MASK_TABLE_LEN], c: char) -> Mask {
    masks.get(c as usize).copied().unwrap_or(Mask::MAX)
}
