//! Editor language supported by a room

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Language of the code shared in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
}

impl Language {
    /// Wire name of the language
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
        }
    }

    /// Template placed in the editor when a room starts in this language
    pub const fn starter_code(self) -> &'static str {
        match self {
            Language::Javascript => {
                "// Write your JavaScript code here\nconsole.log(\"Hello, World!\");\n"
            }
            Language::Python => "# Write your Python code here\nprint(\"Hello, World!\")\n",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" => Ok(Language::Javascript),
            "python" => Ok(Language::Python),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}
