//! Posters

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Poster identifier, as used by the catalog and cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosterId(String);

impl PosterId {
    /// Create a poster identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PosterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PosterId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PosterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Printable poster sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosterSize {
    /// 210 × 297 mm
    A4,

    /// 297 × 420 mm
    A3,

    /// 420 × 594 mm
    A2,

    /// 594 × 841 mm
    A1,
}

impl PosterSize {
    /// All sizes, smallest first.
    pub const ALL: [PosterSize; 4] = [Self::A4, Self::A3, Self::A2, Self::A1];

    /// Size label, e.g. `"A4"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::A2 => "A2",
            Self::A1 => "A1",
        }
    }
}

impl Display for PosterSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised poster size label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown poster size: {0}")]
pub struct UnknownSizeError(pub String);

impl FromStr for PosterSize {
    type Err = UnknownSizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A4" => Ok(Self::A4),
            "A3" => Ok(Self::A3),
            "A2" => Ok(Self::A2),
            "A1" => Ok(Self::A1),
            _ => Err(UnknownSizeError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_parse_case_insensitively() {
        assert_eq!("a3".parse::<PosterSize>(), Ok(PosterSize::A3));
        assert_eq!(" A1 ".parse::<PosterSize>(), Ok(PosterSize::A1));
    }

    #[test]
    fn unknown_size_is_rejected() {
        assert_eq!(
            "A0".parse::<PosterSize>(),
            Err(UnknownSizeError("A0".to_string()))
        );
    }

    #[test]
    fn sizes_display_their_label() {
        let labels: Vec<String> = PosterSize::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(labels, ["A4", "A3", "A2", "A1"]);
    }
}
