//! Constant-time comparison

use subtle::ConstantTimeEq;

/// Compare two byte strings without branching on their contents.
///
/// Lengths are public: unequal lengths return `false` immediately.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
