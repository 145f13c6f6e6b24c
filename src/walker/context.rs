// ============================================================================
// Rounding Context
// The (precision, percent) pair threaded down the walk, and member tags
// ============================================================================

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Suffix that marks a tag as a percentage.
const PERCENT_SUFFIX: &str = ",percent";

/// Rounding settings in effect for a value and everything beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    /// Decimal places to keep (negative rounds to tens, hundreds, ...)
    pub precision: i32,

    /// Multiply leaves by 100 before rounding
    pub percent: bool,
}

impl Context {
    /// Context at the root of a walk.
    #[inline]
    pub const fn new(precision: i32) -> Self {
        Self {
            precision,
            percent: false,
        }
    }

    /// Context for a member carrying `tag`.
    ///
    /// A tag with a precision replaces the context outright, so `"3"` under
    /// a `"2,percent"` ancestor rounds to three places without rescaling.
    /// Percent is not sticky across such a tag. A bare `,percent` keeps the
    /// inherited precision, and an empty tag keeps everything.
    #[inline]
    pub fn apply(self, tag: Tag) -> Self {
        match tag.precision {
            Some(precision) => Self {
                precision,
                percent: tag.percent,
            },
            None => Self {
                precision: self.precision,
                percent: self.percent || tag.percent,
            },
        }
    }

    /// Parse `tag` and apply it.
    pub fn with_tag(self, tag: &str) -> Result<Self, ParseIntError> {
        tag.parse::<Tag>().map(|tag| self.apply(tag))
    }
}

/// A parsed member annotation: `<int>`, `<int>,percent`, `,percent` or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    pub precision: Option<i32>,
    pub percent: bool,
}

impl FromStr for Tag {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, percent) = match s.strip_suffix(PERCENT_SUFFIX) {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let precision = if digits.is_empty() {
            None
        } else {
            Some(digits.parse()?)
        };

        Ok(Self { precision, percent })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = self.precision {
            write!(f, "{}", precision)?;
        }
        if self.percent {
            f.write_str(PERCENT_SUFFIX)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_precision() {
        let tag: Tag = "3".parse().unwrap();
        assert_eq!(
            tag,
            Tag {
                precision: Some(3),
                percent: false
            }
        );

        let tag: Tag = "-1".parse().unwrap();
        assert_eq!(tag.precision, Some(-1));

        let tag: Tag = "+2".parse().unwrap();
        assert_eq!(tag.precision, Some(2));
    }

    #[test]
    fn test_parse_percent() {
        let tag: Tag = "2,percent".parse().unwrap();
        assert_eq!(
            tag,
            Tag {
                precision: Some(2),
                percent: true
            }
        );

        let bare: Tag = ",percent".parse().unwrap();
        assert_eq!(
            bare,
            Tag {
                precision: None,
                percent: true
            }
        );
    }

    #[test]
    fn test_parse_empty() {
        let tag: Tag = "".parse().unwrap();
        assert_eq!(tag, Tag::default());
    }

    #[test]
    fn test_parse_malformed() {
        assert!("abc".parse::<Tag>().is_err());
        assert!("2,percen".parse::<Tag>().is_err());
        assert!(" 2".parse::<Tag>().is_err());
        assert!("2,percent,percent".parse::<Tag>().is_err());
    }

    #[test]
    fn test_apply_replaces() {
        let parent = Context {
            precision: 2,
            percent: true,
        };
        let child = parent.with_tag("4").unwrap();
        assert_eq!(child, Context::new(4));
    }

    #[test]
    fn test_apply_bare_percent_keeps_precision() {
        let child = Context::new(5).with_tag(",percent").unwrap();
        assert_eq!(
            child,
            Context {
                precision: 5,
                percent: true
            }
        );
    }

    #[test]
    fn test_apply_empty_inherits() {
        let parent = Context {
            precision: 1,
            percent: true,
        };
        assert_eq!(parent.with_tag("").unwrap(), parent);
    }

    #[test]
    fn test_display_round_trips_grammar() {
        for text in ["3", "2,percent", ",percent", "", "-1"] {
            let tag: Tag = text.parse().unwrap();
            assert_eq!(tag.to_string(), text);
        }
    }
}
