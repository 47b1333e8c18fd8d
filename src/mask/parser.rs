//! Recursive descent compiler for picture mask strings.
//!
//! The cursor is a character index threaded through every parse routine:
//! each routine takes the index it starts at and returns the node it built
//! together with the index just past it.

use super::ast::*;
use super::class::class_for_symbol;

const ESCAPE: char = ';';
const REPEAT: char = '*';
const OPTIONAL_OPEN: char = '[';
const OPTIONAL_CLOSE: char = ']';
const GROUPING_OPEN: char = '{';
const GROUPING_CLOSE: char = '}';
const SEPARATOR: char = ',';

/// Deepest allowed nesting of repeats, optionals and groupings.
pub const MAX_NESTING: usize = 256;

/// Errors that can occur while compiling a picture mask.
///
/// Every variant except [`MaskError::NoMask`] carries the character index in
/// the mask at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    NoMask,
    DanglingEscape { index: usize },
    DanglingRepeat { index: usize },
    RepeatCountOverflow { index: usize },
    UnterminatedOptional { index: usize },
    UnterminatedGrouping { index: usize },
    EmptyAlternative { index: usize },
    UnexpectedDelimiter { index: usize, found: char },
    NestingTooDeep { index: usize },
}

impl MaskError {
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::NoMask => None,
            Self::DanglingEscape { index }
            | Self::DanglingRepeat { index }
            | Self::RepeatCountOverflow { index }
            | Self::UnterminatedOptional { index }
            | Self::UnterminatedGrouping { index }
            | Self::EmptyAlternative { index }
            | Self::UnexpectedDelimiter { index, .. }
            | Self::NestingTooDeep { index } => Some(index),
        }
    }
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMask => write!(f, "No mask"),
            Self::DanglingEscape { index } => {
                write!(f, "Escape ';' has no character to escape at index {index}")
            }
            Self::DanglingRepeat { index } => {
                write!(f, "Repeat '*' has nothing to repeat at index {index}")
            }
            Self::RepeatCountOverflow { index } => {
                write!(f, "Repeat count too large at index {index}")
            }
            Self::UnterminatedOptional { index } => {
                write!(f, "Missing ']' to close optional at index {index}")
            }
            Self::UnterminatedGrouping { index } => {
                write!(f, "Missing '}}' to close grouping at index {index}")
            }
            Self::EmptyAlternative { index } => {
                write!(f, "Empty alternative at index {index}")
            }
            Self::UnexpectedDelimiter { index, found } => {
                write!(f, "Unexpected {found:?} at index {index}")
            }
            Self::NestingTooDeep { index } => {
                write!(f, "Mask nested more than {MAX_NESTING} levels deep at index {index}")
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Compile a picture mask string into a [`Mask`] tree.
pub fn compile(input: &str) -> Result<Mask, MaskError> {
    let parser = Parser {
        chars: input.chars().collect(),
    };
    let nodes = parser.parse_root()?;
    Ok(Mask {
        source: input.to_string(),
        nodes,
    })
}

struct Parser {
    chars: Vec<char>,
}

impl Parser {
    fn parse_root(&self) -> Result<Vec<Node>, MaskError> {
        let mut nodes = Vec::new();
        let mut pos = 0;
        while pos < self.chars.len() {
            let (node, next) = self.parse_node(pos, 0)?;
            nodes.push(node);
            pos = next;
        }
        if nodes.is_empty() {
            return Err(MaskError::NoMask);
        }
        Ok(nodes)
    }

    /// Parse exactly one node starting at `pos`, which must be in bounds.
    /// `depth` counts the constructs enclosing it.
    fn parse_node(&self, pos: usize, depth: usize) -> Result<(Node, usize), MaskError> {
        if depth > MAX_NESTING {
            return Err(MaskError::NestingTooDeep { index: pos });
        }
        let c = self.chars[pos];
        let (kind, next) = match c {
            ESCAPE => match self.chars.get(pos + 1) {
                Some(&escaped) => (NodeKind::Literal(escaped), pos + 2),
                None => return Err(MaskError::DanglingEscape { index: pos + 1 }),
            },
            REPEAT => self.parse_repeat(pos, depth)?,
            OPTIONAL_OPEN => {
                let (groups, next) = self.parse_alternatives(pos, OPTIONAL_CLOSE, depth)?;
                (NodeKind::Optional(groups), next)
            }
            GROUPING_OPEN => {
                let (groups, next) = self.parse_alternatives(pos, GROUPING_CLOSE, depth)?;
                (NodeKind::Grouping(groups), next)
            }
            SEPARATOR | OPTIONAL_CLOSE | GROUPING_CLOSE => {
                return Err(MaskError::UnexpectedDelimiter {
                    index: pos,
                    found: c,
                });
            }
            _ => match class_for_symbol(c) {
                Some(class) => (NodeKind::Class(class), pos + 1),
                None => (NodeKind::Literal(c), pos + 1),
            },
        };
        Ok((
            Node {
                kind,
                source: self.slice(pos, next),
            },
            next,
        ))
    }

    /// Parse `*[count]x` (with `pos` at the `*`).
    fn parse_repeat(&self, pos: usize, depth: usize) -> Result<(NodeKind, usize), MaskError> {
        let mut next = pos + 1;
        let mut count = 0usize;
        while let Some(digit) = self.chars.get(next).and_then(|c| c.to_digit(10)) {
            count = count
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or(MaskError::RepeatCountOverflow { index: next })?;
            next += 1;
        }
        match self.chars.get(next) {
            None | Some(&SEPARATOR) | Some(&OPTIONAL_CLOSE) | Some(&GROUPING_CLOSE) => {
                return Err(MaskError::DanglingRepeat { index: next });
            }
            Some(_) => {}
        }
        let (child, next) = self.parse_node(next, depth + 1)?;
        Ok((
            NodeKind::Repeat {
                count,
                child: Box::new(child),
            },
            next,
        ))
    }

    /// Parse the comma-separated alternatives of `[...]` or `{...}`, with
    /// `open` at the opening bracket. Returns the index past `close`.
    fn parse_alternatives(
        &self,
        open: usize,
        close: char,
        depth: usize,
    ) -> Result<(Vec<Group>, usize), MaskError> {
        let mut groups = Vec::new();
        let mut pos = open + 1;
        loop {
            let start = pos;
            let mut nodes = Vec::new();
            let delimiter = loop {
                match self.chars.get(pos) {
                    None => {
                        return Err(if close == OPTIONAL_CLOSE {
                            MaskError::UnterminatedOptional { index: pos }
                        } else {
                            MaskError::UnterminatedGrouping { index: pos }
                        });
                    }
                    Some(&c) if c == SEPARATOR || c == close => break c,
                    Some(_) => {
                        let (node, next) = self.parse_node(pos, depth + 1)?;
                        nodes.push(node);
                        pos = next;
                    }
                }
            };
            if nodes.is_empty() {
                return Err(MaskError::EmptyAlternative { index: pos });
            }
            groups.push(Group {
                nodes,
                source: self.slice(start, pos),
            });
            pos += 1; // consume ',' or the closing bracket
            if delimiter == close {
                return Ok((groups, pos));
            }
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}
