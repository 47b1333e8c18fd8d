//! Character class symbols and membership tests.

use phf::{Map, phf_map};

use super::ast::ClassKind;

/// Mask symbols that compile to a single-character class.
static CLASS_SYMBOLS: Map<char, ClassKind> = phf_map! {
    '!' => ClassKind::AnyCharToUpper,
    '#' => ClassKind::Digit,
    '&' => ClassKind::LetterToUpper,
    '?' => ClassKind::Letter,
    '@' => ClassKind::AnyChar,
    '~' => ClassKind::LetterToLower,
};

/// Look up the class a mask symbol stands for, if any.
pub fn class_for_symbol(c: char) -> Option<ClassKind> {
    CLASS_SYMBOLS.get(&c).copied()
}

/// Test whether `ch` is a member of the class `kind`.
///
/// Case-converting classes accept either case; the conversion itself belongs
/// to whoever owns the text.
pub fn class_matches(kind: ClassKind, ch: char) -> bool {
    match kind {
        ClassKind::Digit => ch.is_ascii_digit(),
        ClassKind::Letter | ClassKind::LetterToUpper | ClassKind::LetterToLower => {
            ch.is_alphabetic()
        }
        ClassKind::AnyChar | ClassKind::AnyCharToUpper => true,
    }
}

/// Noun phrase for match diagnostics ("expected a digit").
pub fn describe(kind: ClassKind) -> &'static str {
    match kind {
        ClassKind::Digit => "a digit",
        ClassKind::Letter | ClassKind::LetterToUpper | ClassKind::LetterToLower => "a letter",
        ClassKind::AnyChar | ClassKind::AnyCharToUpper => "any character",
    }
}
