//! Superstring verification
//!
//! Checks a candidate superstring against the strings it claims to cover,
//! either by explicit placements or by plain containment.

use thiserror::Error;

/// Placement verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// One offset per string is required
    #[error("Offset count mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The string does not occur at its claimed offset
    #[error("String {index} does not occur at offset {offset}")]
    Misplaced { index: usize, offset: usize },
}

/// Verify that `strings[i]` occurs in `text` at byte offset `offsets[i]`
pub fn verify_placements<S: AsRef<str>>(
    text: &str,
    strings: &[S],
    offsets: &[usize],
) -> Result<(), VerifyError> {
    if strings.len() != offsets.len() {
        return Err(VerifyError::LengthMismatch {
            expected: strings.len(),
            found: offsets.len(),
        });
    }

    let bytes = text.as_bytes();
    for (index, (s, &offset)) in strings.iter().zip(offsets).enumerate() {
        let s = s.as_ref().as_bytes();
        let placed = offset
            .checked_add(s.len())
            .and_then(|end| bytes.get(offset..end));

        if placed != Some(s) {
            return Err(VerifyError::Misplaced { index, offset });
        }
    }

    Ok(())
}

/// Check that every string occurs somewhere in `text`
pub fn is_superstring<S: AsRef<str>>(text: &str, strings: &[S]) -> bool {
    strings.iter().all(|s| text.contains(s.as_ref()))
}
