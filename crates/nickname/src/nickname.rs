//! The nickname value type.

use std::fmt;

use serde::Serialize;

/// A generated nickname such as `"Otter Steady"`.
///
/// Nicknames are derived, never persisted, and always made of one animal and
/// one adjective joined by a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub(crate) fn from_parts(animal: &str, adjective: &str) -> Self {
        Self(format!("{animal} {adjective}"))
    }

    /// Returns the animal half of the nickname.
    #[must_use]
    pub fn animal(&self) -> &str {
        self.0
            .split_once(' ')
            .map_or(self.0.as_str(), |(animal, _)| animal)
    }

    /// Returns the adjective half of the nickname.
    #[must_use]
    pub fn adjective(&self) -> &str {
        self.0
            .split_once(' ')
            .map_or("", |(_, adjective)| adjective)
    }

    /// Consumes the nickname and returns the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Nickname> for String {
    fn from(value: Nickname) -> Self {
        value.0
    }
}
