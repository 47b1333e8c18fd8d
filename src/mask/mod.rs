//! Picture mask engine.
//!
//! A mask describes the shape of acceptable input. It is compiled once into a
//! tree and then checked against candidate text as often as needed, usually
//! after every keystroke.
//!
//! # Mask syntax
//!
//! | Token        | Meaning                                             |
//! |--------------|-----------------------------------------------------|
//! | `#`          | One ASCII digit                                     |
//! | `?`          | One letter                                          |
//! | `&`          | One letter (host converts to uppercase)             |
//! | `~`          | One letter (host converts to lowercase)             |
//! | `@`          | Any character                                       |
//! | `!`          | Any character (host converts to uppercase)          |
//! | `;X`         | The character `X` literally                         |
//! | `*X`         | `X` repeated until the text runs out                |
//! | `*nX`        | `X` exactly `n` times                               |
//! | `[A,B,...]`  | Optional: at most one of the alternatives           |
//! | `{A,B,...}`  | Grouping: exactly one of the alternatives           |
//! | other        | That character literally                            |
//!
//! Alternatives are tried in order and the first one that does not fail is
//! taken; there is no backtracking into later alternatives.

pub mod ast;
pub mod class;
mod dump;
pub mod matcher;
pub mod parser;

#[cfg(test)]
mod tests;

pub use ast::{ClassKind, Group, Mask, Node, NodeKind};
pub use matcher::{MatchResult, MatchStatus, check};
pub use parser::{MAX_NESTING, MaskError, compile};
