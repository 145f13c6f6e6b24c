// ============================================================================
// Walk Errors
// A failure cause plus the path of fields, indices and keys leading to it
// ============================================================================

use std::fmt;
use std::num::ParseIntError;

/// One step on the way from the root to a failing value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Composite member, rendered `.name`
    Field(String),
    /// Sequence position, rendered `[index]`
    Index(usize),
    /// Map entry, rendered `[key]`
    Key(String),
}

impl PathSegment {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn key(key: impl fmt::Display) -> Self {
        Self::Key(key.to_string())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(index) => write!(f, "[{}]", index),
            PathSegment::Key(key) => write!(f, "[{}]", key),
        }
    }
}

/// Path from the root of a walk to a failing value.
///
/// Segments are collected innermost first while the recursion unwinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Segments from the root downwards.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> + '_ {
        self.0.iter().rev()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments().try_for_each(|segment| write!(f, "{}", segment))
    }
}

/// Why a walk stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A float leaf held NaN
    #[error(" is not a number (but should be)")]
    NotANumber,

    /// A member tag was not `<int>[,percent]`
    #[error(": failed to parse precision tag: {source}")]
    MalformedTag {
        tag: String,
        #[source]
        source: ParseIntError,
    },

    /// A leaf left the representable range while rescaling
    #[error(" left the representable range")]
    Overflow,
}

/// Error returned by [`recursive`](crate::recursive), e.g.
/// `.floats[0] is not a number (but should be)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}{kind}")]
pub struct RoundError {
    path: FieldPath,
    kind: ErrorKind,
}

impl RoundError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            path: FieldPath::default(),
            kind,
        }
    }

    pub fn not_a_number() -> Self {
        Self::new(ErrorKind::NotANumber)
    }

    pub fn malformed_tag(tag: &str, source: ParseIntError) -> Self {
        Self::new(ErrorKind::MalformedTag {
            tag: tag.to_owned(),
            source,
        })
    }

    pub fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Prefix the path with the segment of the enclosing value.
    #[must_use]
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.0.push(segment);
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }
}
