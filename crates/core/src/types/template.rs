//! Signature template letter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which of the three signature templates to render.
///
/// - `A` - employee template with the embedded logo
/// - `B` - employee template without the logo
/// - `C` - contractor template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateLetter {
    A,
    B,
    C,
}

impl TemplateLetter {
    /// The letter as persisted in the roaming store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Parse a persisted letter. Anything but "A"/"B"/"C" is `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
