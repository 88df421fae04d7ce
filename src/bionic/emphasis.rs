//! Emphasis modes and the word-length to emphasis-length mapping.
//!
//! [`emphasis_length`] is the one place this mapping lives; the page
//! transformer and the settings preview both call it.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// How many leading characters of each word core to emphasize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmphasisMode {
    /// Roughly 40% of the word, by length band.
    #[default]
    Auto,
    /// A fixed count, clamped to the word length.
    Fixed(NonZeroUsize),
}

/// Modes offered by the settings selector, in slider order.
pub const MODE_PRESETS: [(EmphasisMode, &str); 5] = [
    (EmphasisMode::Auto, "Auto"),
    (EmphasisMode::fixed_const(1), "1 char"),
    (EmphasisMode::fixed_const(2), "2 chars"),
    (EmphasisMode::fixed_const(3), "3 chars"),
    (EmphasisMode::fixed_const(4), "4 chars"),
];

impl EmphasisMode {
    /// Fixed mode with `count` characters; `None` for zero.
    pub fn fixed(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self::Fixed)
    }

    pub(crate) const fn fixed_const(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(n) => Self::Fixed(n),
            None => Self::Auto,
        }
    }

    /// Selector label for this mode ("Auto", "2 chars", ...).
    pub fn label(self) -> String {
        match self {
            Self::Auto => "Auto".to_string(),
            Self::Fixed(n) if n.get() == 1 => "1 char".to_string(),
            Self::Fixed(n) => format!("{n} chars"),
        }
    }

    /// Position of this mode in [`MODE_PRESETS`], if it is one of them.
    pub fn preset_index(self) -> Option<usize> {
        MODE_PRESETS.iter().position(|(mode, _)| *mode == self)
    }

    /// Decode a loosely-typed settings or message value.
    ///
    /// Accepts `"auto"`, a positive integer, or a string holding one.
    /// Anything falsy or unrecognized (`0`, `null`, `""`, `false`) yields `None`,
    /// letting the caller fall back to its default.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => {
                let count = n
                    .as_u64()
                    .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f.trunc() as u64))?;
                Self::fixed(usize::try_from(count).ok()?)
            }
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for EmphasisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for EmphasisMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse::<usize>()
            .ok()
            .and_then(Self::fixed)
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

impl Serialize for EmphasisMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(n) => serializer.serialize_u64(n.get() as u64),
        }
    }
}

impl<'de> Deserialize<'de> for EmphasisMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ModeVisitor;

        impl Visitor<'_> for ModeVisitor {
            type Value = EmphasisMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"auto\" or a positive integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<EmphasisMode, E> {
                usize::try_from(v)
                    .ok()
                    .and_then(EmphasisMode::fixed)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<EmphasisMode, E> {
                match u64::try_from(v) {
                    Ok(v) => self.visit_u64(v),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<EmphasisMode, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(ModeVisitor)
    }
}

/// Serde helper for optional mode fields that treats falsy values as absent.
pub(crate) fn deserialize_lenient<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<EmphasisMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(EmphasisMode::from_json))
}

/// Number of leading characters to emphasize in a word core of length `n`.
///
/// For every `n >= 1` the result is in `1..=n`; `n == 0` yields 0.
pub fn emphasis_length(n: usize, mode: EmphasisMode) -> usize {
    let len = match mode {
        EmphasisMode::Fixed(k) => k.get(),
        EmphasisMode::Auto => match n {
            0..=3 => 1,
            4..=6 => 2,
            7..=9 => 3,
            10..=13 => 4,
            // ceil(n * 0.4)
            _ => (2 * n).div_ceil(5),
        },
    };
    len.min(n)
}
