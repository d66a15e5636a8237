//! Display name rules shared by nicknames and word lists.
//!
//! A nickname is shown wherever a member's display name would be, so every
//! nickname must satisfy the same constraints. Word lists are checked against
//! these rules when they are built, which keeps generation itself infallible.
//!
//! # Validation Rules
//!
//! - Minimum length: 3 characters
//! - Maximum length: 32 characters
//! - Allowed characters: letters (A-Z, a-z), digits (0-9), spaces, underscores
//! - Must not be whitespace-only

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 3;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 32;

/// Validates a display name against the application's constraints.
///
/// Returns `true` if the name satisfies all validation rules:
/// - Length between [`DISPLAY_NAME_MIN`] and [`DISPLAY_NAME_MAX`] characters
/// - Contains only alphanumeric characters, spaces, and underscores
/// - Is not whitespace-only
///
/// # Examples
///
/// ```
/// use nickname::is_valid_display_name;
///
/// assert!(is_valid_display_name("Otter Steady"));
/// assert!(is_valid_display_name("coach_123"));
/// assert!(!is_valid_display_name("ab"));           // Too short
/// assert!(!is_valid_display_name("Sea-Lion"));     // Invalid character
/// assert!(!is_valid_display_name("   "));          // Whitespace-only
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_display_name_char)
}

/// Returns `true` if the word can appear as one half of a nickname.
///
/// Words are joined with a single space, so a word itself must be non-empty
/// and made of ASCII letters and digits only.
#[must_use]
pub(crate) fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric())
}

#[must_use]
const fn is_valid_display_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_'
}
