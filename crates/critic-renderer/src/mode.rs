//! Processing mode selection.

use std::fmt;
use std::str::FromStr;

use crate::renderer::render;
use crate::resolve::{Resolution, resolve};

/// How CriticMarkup in a document is processed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Render changes as HTML.
    #[default]
    Markup,
    /// Keep every proposed change.
    Accept,
    /// Discard every proposed change.
    Reject,
}

impl Mode {
    /// Process `input` according to this mode.
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Markup => render(input),
            Self::Accept => resolve(input, Resolution::Accept),
            Self::Reject => resolve(input, Resolution::Reject),
        }
    }

    /// Mode name as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}', expected one of: markup, accept, reject")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markup" => Ok(Self::Markup),
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}
