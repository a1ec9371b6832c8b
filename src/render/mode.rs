// Rendering mode selector.
//
// Grammar (case-sensitive):
//   "full"            -> Mode::Full
//   "compact"         -> Mode::Compact
//   "full:" DIGITS    -> Mode::FullWithThreshold(n), n >= 1

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::ModeError;

const FULL: &str = "full";
const COMPACT: &str = "compact";
const THRESHOLD_PREFIX: &str = "full:";

/// How unchanged runs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Unchanged text verbatim.
    #[default]
    Full,
    /// Every unchanged run as `[=len]`.
    Compact,
    /// Unchanged runs of at least `n` characters as `[=len]`, shorter ones
    /// verbatim.
    FullWithThreshold(NonZeroUsize),
}

impl Mode {
    /// Parse an optional selector; `None` means [`Mode::Full`].
    pub fn resolve(selector: Option<&str>) -> Result<Self, ModeError> {
        match selector {
            None => Ok(Self::Full),
            Some(s) => s.parse(),
        }
    }

    /// Whether an unchanged run of `len` characters is rendered as a count.
    #[inline]
    pub fn compacts(self, len: usize) -> bool {
        match self {
            Self::Full => false,
            Self::Compact => true,
            Self::FullWithThreshold(n) => len >= n.get(),
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FULL => return Ok(Self::Full),
            COMPACT => return Ok(Self::Compact),
            _ => {}
        }

        let Some(digits) = s.strip_prefix(THRESHOLD_PREFIX) else {
            return Err(ModeError::Unknown(s.to_string()));
        };

        // `usize::from_str` would accept a leading '+'; only bare digits are
        // allowed here.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModeError::InvalidThreshold(s.to_string()));
        }
        digits
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self::FullWithThreshold)
            .ok_or_else(|| ModeError::InvalidThreshold(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str(FULL),
            Self::Compact => f.write_str(COMPACT),
            Self::FullWithThreshold(n) => write!(f, "{THRESHOLD_PREFIX}{n}"),
        }
    }
}
