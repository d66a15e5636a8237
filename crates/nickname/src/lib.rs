//! Deterministic member nicknames derived from user identifiers.
//!
//! Members who have not chosen a display name are shown a nickname built
//! from their identifier: one animal and one adjective, such as
//! `"Otter Steady"`. The mapping is a pure function of the identifier, so
//! every screen renders the same label without storing it.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Hashing identifiers with hyphen-insensitive 32-bit arithmetic
//! - Generating nicknames from the built-in or custom word lists
//! - Loading custom word lists from versioned JSON documents
//! - Display name validation shared with the rest of the application
//!
//! # Example
//!
//! ```
//! use nickname::{NicknameGenerator, nickname_for};
//!
//! let nickname = nickname_for("00000000-0000-0000-0000-000000000000");
//! assert_eq!(nickname.as_ref(), "Cheetah Focused");
//!
//! let generator = NicknameGenerator::builtin();
//! assert_eq!(generator.generate(""), nickname_for(""));
//! ```

pub mod cli;
mod error;
mod generator;
mod hash;
mod nickname;
mod settings;
mod validation;
mod words;

pub use error::{WordListError, WordListKind};
pub use generator::{NicknameGenerator, nickname_for};
pub use hash::identifier_hash;
pub use nickname::Nickname;
pub use settings::NicknameSettings;
pub use validation::{DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, is_valid_display_name};
pub use words::{ADJECTIVES, ANIMALS, WordList, WordLists};
