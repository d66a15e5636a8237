//! Deterministic nickname generation from user identifiers.
//!
//! The identifier hash picks one adjective by remainder and one animal by
//! quotient. The same identifier always produces the same nickname; there is
//! no randomness and no hidden state.

use std::sync::OnceLock;

use uuid::Uuid;

use crate::hash::{hash_magnitude, identifier_hash};
use crate::nickname::Nickname;
use crate::words::WordLists;

static BUILTIN: OnceLock<NicknameGenerator> = OnceLock::new();

/// Maps identifiers to nicknames drawn from a pair of word lists.
///
/// The generator holds only immutable tables, so a single instance can be
/// shared freely across threads.
///
/// # Example
///
/// ```
/// use nickname::NicknameGenerator;
///
/// let generator = NicknameGenerator::builtin();
/// let first = generator.generate("3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// let second = generator.generate("3fa85f6457174562b3fc2c963f66afa6");
///
/// assert_eq!(first, second);
/// assert_eq!(first.as_ref(), "Rhino Fierce");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameGenerator {
    lists: WordLists,
}

impl NicknameGenerator {
    /// Creates a generator over the supplied word lists.
    #[must_use]
    pub const fn new(lists: WordLists) -> Self {
        Self { lists }
    }

    /// Returns the shared generator over the built-in word lists.
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| Self::new(WordLists::builtin()))
    }

    /// Returns the word lists this generator draws from.
    #[must_use]
    pub const fn word_lists(&self) -> &WordLists {
        &self.lists
    }

    /// Generates the nickname for an identifier.
    ///
    /// Total over all strings: an empty identifier hashes to zero and yields
    /// the first animal and the first adjective.
    #[must_use]
    pub fn generate(&self, identifier: &str) -> Nickname {
        let (adjective_index, animal_index) = self.indices(identifier_hash(identifier));
        let animal = self.lists.animals().get(animal_index).unwrap_or_default();
        let adjective = self
            .lists
            .adjectives()
            .get(adjective_index)
            .unwrap_or_default();
        Nickname::from_parts(animal, adjective)
    }

    /// Generates the nickname for a UUID in its hyphenated lowercase form.
    #[must_use]
    pub fn generate_for_uuid(&self, id: &Uuid) -> Nickname {
        self.generate(&id.hyphenated().to_string())
    }

    /// Returns `(adjective_index, animal_index)` for a hash.
    fn indices(&self, hash: i32) -> (u32, u32) {
        let magnitude = hash_magnitude(hash);
        let adjectives = self.lists.adjectives().count();
        let animals = self.lists.animals().count();
        (magnitude % adjectives, (magnitude / adjectives) % animals)
    }
}

impl Default for NicknameGenerator {
    fn default() -> Self {
        Self::new(WordLists::builtin())
    }
}

/// Generates the nickname for an identifier using the built-in word lists.
///
/// # Examples
///
/// ```
/// use nickname::nickname_for;
///
/// assert_eq!(nickname_for("").as_ref(), "Bear Agile");
/// assert_eq!(nickname_for("user-42"), nickname_for("user42"));
/// ```
#[must_use]
pub fn nickname_for(identifier: &str) -> Nickname {
    NicknameGenerator::builtin().generate(identifier)
}
