//! Identifier hashing.
//!
//! Identifiers are reduced to a 32-bit signed hash with the classic
//! `hash * 31 + c` accumulation. All arithmetic wraps in two's complement so
//! the result is identical on every platform and matches nicknames already
//! shown to members.

/// Separator stripped from identifiers before hashing.
const SEPARATOR: char = '-';

/// Multiplier of the polynomial accumulation.
const MULTIPLIER: u32 = 31;

/// Hashes an identifier into a 32-bit signed value.
///
/// Hyphens are ignored, so `"3fa85f64-5717"` and `"3fa85f645717"` hash to the
/// same value. Each remaining character contributes its Unicode code point.
///
/// # Examples
///
/// ```
/// use nickname::identifier_hash;
///
/// assert_eq!(identifier_hash(""), 0);
/// assert_eq!(identifier_hash("a"), 97);
/// assert_eq!(identifier_hash("a-b"), identifier_hash("ab"));
/// ```
#[must_use]
pub fn identifier_hash(identifier: &str) -> i32 {
    identifier
        .chars()
        .filter(|c| *c != SEPARATOR)
        .fold(0_u32, |hash, c| {
            hash.wrapping_mul(MULTIPLIER).wrapping_add(u32::from(c))
        })
        .cast_signed()
}

/// Returns the magnitude of a hash used for table lookups.
///
/// `i32::MIN` has no positive counterpart, so the magnitude is returned
/// unsigned: `2_147_483_648` rather than an overflow.
#[must_use]
pub(crate) const fn hash_magnitude(hash: i32) -> u32 {
    hash.unsigned_abs()
}
