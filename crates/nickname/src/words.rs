//! Word lists that nicknames are drawn from.
//!
//! The built-in tables hold twenty adjectives and twenty animals. Replacement
//! tables can be supplied in a versioned JSON document; they pass through the
//! same validation so every nickname stays a valid display name.

use std::num::NonZeroU32;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use tracing::debug;

use crate::error::{WordListError, WordListKind};
use crate::validation::{DISPLAY_NAME_MAX, is_valid_word};

/// Current supported word list document version.
const SUPPORTED_VERSION: u32 = 1;

/// Built-in adjectives, indexed by the hash remainder.
pub const ADJECTIVES: [&str; 20] = [
    "Agile",
    "Bold",
    "Brave",
    "Calm",
    "Daring",
    "Eager",
    "Fearless",
    "Fierce",
    "Focused",
    "Hardy",
    "Lively",
    "Mighty",
    "Nimble",
    "Quick",
    "Relentless",
    "Steady",
    "Strong",
    "Swift",
    "Tireless",
    "Vital",
];

/// Built-in animals, indexed by the hash quotient.
pub const ANIMALS: [&str; 20] = [
    "Bear", "Bison", "Cheetah", "Dolphin", "Eagle", "Falcon", "Fox", "Gazelle", "Hawk", "Jaguar",
    "Lion", "Lynx", "Mustang", "Otter", "Panther", "Puma", "Rhino", "Shark", "Tiger", "Wolf",
];

/// A validated, non-empty, ordered list of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    len: NonZeroU32,
}

impl WordList {
    fn new(list: WordListKind, words: Vec<String>) -> Result<Self, WordListError> {
        let count = words.len();
        let addressable = u32::try_from(count).map_err(|_| WordListError::TooManyWords {
            list,
            count,
            max: u32::MAX,
        })?;
        let len = NonZeroU32::new(addressable).ok_or(WordListError::EmptyList { list })?;

        if let Some((index, value)) = words
            .iter()
            .enumerate()
            .find(|(_, word)| !is_valid_word(word))
        {
            return Err(WordListError::InvalidWord {
                list,
                index,
                value: value.clone(),
            });
        }

        Ok(Self { words, len })
    }

    fn from_static(table: &[&str]) -> Self {
        let words: Vec<String> = table.iter().map(|word| (*word).to_owned()).collect();
        let len = u32::try_from(words.len())
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MIN);
        Self { words, len }
    }

    /// Returns the number of words as a non-zero divisor.
    #[must_use]
    pub const fn count(&self) -> NonZeroU32 {
        self.len
    }

    /// Returns the words in lookup order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the word at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.words.get(position))
            .map(String::as_str)
    }

    fn longest(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or_default()
    }
}

/// The adjective and animal lists used to build nicknames.
///
/// # Example
///
/// ```
/// use nickname::WordLists;
///
/// let lists = WordLists::new(
///     vec!["Swift".to_owned(), "Steady".to_owned()],
///     vec!["Otter".to_owned()],
/// )
/// .expect("valid lists");
///
/// assert_eq!(lists.adjectives().count().get(), 2);
/// assert_eq!(lists.animals().get(0), Some("Otter"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    adjectives: WordList,
    animals: WordList,
}

impl WordLists {
    /// Builds word lists from owned words.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if:
    /// - Either list is empty or has more than `u32::MAX` entries
    /// - Any word is not made of ASCII letters and digits
    /// - The longest possible nickname exceeds [`DISPLAY_NAME_MAX`]
    pub fn new(adjectives: Vec<String>, animals: Vec<String>) -> Result<Self, WordListError> {
        let adjective_list = WordList::new(WordListKind::Adjectives, adjectives)?;
        let animal_list = WordList::new(WordListKind::Animals, animals)?;

        // Longest animal, one space, longest adjective.
        let length = animal_list.longest() + 1 + adjective_list.longest();
        if length > DISPLAY_NAME_MAX {
            return Err(WordListError::NicknameTooLong {
                length,
                max: DISPLAY_NAME_MAX,
            });
        }

        Ok(Self {
            adjectives: adjective_list,
            animals: animal_list,
        })
    }

    /// Returns the built-in twenty adjectives and twenty animals.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            adjectives: WordList::from_static(&ADJECTIVES),
            animals: WordList::from_static(&ANIMALS),
        }
    }

    /// Parses word lists from a JSON document.
    ///
    /// The document carries a `version` and two arrays, `adjectives` and
    /// `animals`.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the JSON is malformed, the version is
    /// unsupported, or the lists fail validation.
    ///
    /// # Example
    ///
    /// ```
    /// use nickname::WordLists;
    ///
    /// let json = r#"{
    ///     "version": 1,
    ///     "adjectives": ["Swift", "Steady"],
    ///     "animals": ["Otter", "Heron"]
    /// }"#;
    ///
    /// let lists = WordLists::from_json(json).expect("valid word lists");
    /// assert_eq!(lists.animals().count().get(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, WordListError> {
        let raw: RawWordLists =
            serde_json::from_str(json).map_err(|e| WordListError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(WordListError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::new(raw.adjectives, raw.animals)
    }

    /// Loads word lists from a JSON file.
    ///
    /// The file is opened through a capability handle on its parent
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, WordListError> {
        let contents = read_file(path).map_err(|e| WordListError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let lists = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            adjectives = lists.adjectives.len.get(),
            animals = lists.animals.len.get(),
            "loaded word lists"
        );
        Ok(lists)
    }

    /// Returns the adjective list.
    #[must_use]
    pub const fn adjectives(&self) -> &WordList {
        &self.adjectives
    }

    /// Returns the animal list.
    #[must_use]
    pub const fn animals(&self) -> &WordList {
        &self.animals
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_file(path: &Path) -> std::io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path must name a file")
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(Path::new(file_name))
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWordLists {
    version: u32,
    adjectives: Vec<String>,
    animals: Vec<String>,
}
