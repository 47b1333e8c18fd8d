//! Compiled tree types for picture masks.

use std::fmt;
use std::str::FromStr;

use super::matcher::{self, MatchResult};
use super::parser::{self, MaskError};

/// A compiled picture mask: the root of the tree.
///
/// The top-level nodes form a left-to-right sequence that must account for the
/// whole candidate text. A `Mask` is immutable once compiled and can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pub source: String,
    pub nodes: Vec<Node>,
}

impl Mask {
    /// Check `text` against this mask. See [`matcher::check`].
    pub fn check(&self, text: &str) -> MatchResult {
        matcher::check(self, text)
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::compile(s)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// One compiled element of a mask, together with the mask text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// The exact mask substring this node was parsed from.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// One character from a class (`#`, `?`, `&`, `~`, `@`, `!`).
    Class(ClassKind),
    /// Exactly this character.
    Literal(char),
    /// `*n x` — `count` repetitions of `child`; a count of 0 repeats until
    /// the text runs out.
    Repeat { count: usize, child: Box<Node> },
    /// `[a,b,...]` — at most one alternative, first match wins.
    Optional(Vec<Group>),
    /// `{a,b,...}` — exactly one alternative, first match wins.
    Grouping(Vec<Group>),
}

impl NodeKind {
    /// Short name used in tree dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Class(kind) => kind.name(),
            Self::Literal(_) => "Literal",
            Self::Repeat { .. } => "Repeat",
            Self::Optional(_) => "Optional",
            Self::Grouping(_) => "Grouping",
        }
    }
}

/// The body of one alternative of an optional or a grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub nodes: Vec<Node>,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Digit,          // #
    Letter,         // ?
    LetterToUpper,  // &
    LetterToLower,  // ~
    AnyChar,        // @
    AnyCharToUpper, // !
}

impl ClassKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit => "Digit",
            Self::Letter => "Letter",
            Self::LetterToUpper => "LetterToUpper",
            Self::LetterToLower => "LetterToLower",
            Self::AnyChar => "AnyChar",
            Self::AnyCharToUpper => "AnyCharToUpper",
        }
    }
}
