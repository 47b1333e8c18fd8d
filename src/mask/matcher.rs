//! Match engine: check candidate text against a compiled [`Mask`].
//!
//! All indices are **character** (not byte) indices into the text.
//!
//! Every node reports one of three verdicts. A node that reaches the end of the
//! text before it can decide reports [`MatchStatus::OkSoFar`] rather than
//! failing, which is what makes the engine usable while the text is still
//! being typed.

use std::fmt;

use itertools::Itertools;

use super::ast::*;
use super::class::{class_matches, describe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// A contradiction was found.
    NotOk,
    /// Consistent so far, but the text ends before the mask is satisfied.
    OkSoFar,
    /// The mask is satisfied.
    Ok,
}

impl MatchStatus {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// True for `Ok` and `OkSoFar`: more input may still complete a match.
    pub fn is_acceptable(self) -> bool {
        self != Self::NotOk
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotOk => "NotOk",
            Self::OkSoFar => "OkSoFar",
            Self::Ok => "Ok",
        })
    }
}

/// The verdict of checking one candidate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Index reached in the text; for `NotOk`, where the contradiction was found.
    pub index: usize,
    pub status: MatchStatus,
    /// Why the text was rejected, for `NotOk` results.
    pub message: Option<String>,
    /// The tree itself is malformed (an empty alternative list or group).
    /// Compiled masks never are.
    pub malformed: bool,
}

impl MatchResult {
    fn new(index: usize, status: MatchStatus) -> Self {
        Self {
            index,
            status,
            message: None,
            malformed: false,
        }
    }

    fn ok(index: usize) -> Self {
        Self::new(index, MatchStatus::Ok)
    }

    fn ok_so_far(index: usize) -> Self {
        Self::new(index, MatchStatus::OkSoFar)
    }

    fn not_ok(index: usize, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(index, MatchStatus::NotOk)
        }
    }

    fn malformed(index: usize, what: &str) -> Self {
        Self {
            malformed: true,
            ..Self::not_ok(index, format!("malformed mask tree: {what}"))
        }
    }
}

/// Check `text` against `mask`, starting at index 0.
///
/// `Ok` means the whole text conforms to the whole mask; `OkSoFar` means the
/// text is a conforming prefix.
pub fn check(mask: &Mask, text: &str) -> MatchResult {
    let text: Vec<char> = text.chars().collect();
    let result = match_sequence(&mask.nodes, &text, 0);
    if result.status.is_ok() && result.index < text.len() {
        return MatchResult::not_ok(result.index, "more text than mask");
    }
    result
}

// ─── Core matching functions ─────────────────────────────────────────────────

/// Match `nodes` one after another, stopping at the first node that is not
/// `Ok`.
fn match_sequence(nodes: &[Node], text: &[char], pos: usize) -> MatchResult {
    let mut pos = pos;
    for node in nodes {
        let result = match_node(node, text, pos);
        if !result.status.is_ok() {
            return result;
        }
        pos = result.index;
    }
    MatchResult::ok(pos)
}

fn match_node(node: &Node, text: &[char], pos: usize) -> MatchResult {
    match &node.kind {
        NodeKind::Class(kind) => {
            let expected = || describe(*kind).to_string();
            match_char(text, pos, |ch| class_matches(*kind, ch), expected)
        }
        NodeKind::Literal(lit) => match_char(text, pos, |ch| ch == *lit, || format!("{lit:?}")),
        NodeKind::Repeat { count: 0, child } => match_unbounded(child, text, pos),
        NodeKind::Repeat { count, child } => match_bounded(*count, child, text, pos),
        NodeKind::Grouping(groups) => match_grouping(groups, text, pos),
        NodeKind::Optional(groups) => match_optional(groups, text, pos),
    }
}

fn match_char(
    text: &[char],
    pos: usize,
    test: impl Fn(char) -> bool,
    expected: impl Fn() -> String,
) -> MatchResult {
    match text.get(pos) {
        None => MatchResult::ok_so_far(pos),
        Some(&ch) if test(ch) => MatchResult::ok(pos + 1),
        Some(&ch) => MatchResult::not_ok(pos, format!("expected {}, found {ch:?}", expected())),
    }
}

/// `*x`: keep matching `child` until the text runs out.
fn match_unbounded(child: &Node, text: &[char], pos: usize) -> MatchResult {
    let mut pos = pos;
    while pos < text.len() {
        let result = match_node(child, text, pos);
        if !result.status.is_ok() {
            return result;
        }
        if result.index == pos {
            break; // no progress
        }
        pos = result.index;
    }
    MatchResult::ok(pos)
}

/// `*nx`: match `child` exactly `count` times.
///
/// Running out of text part way is not a failure: the child reports
/// `OkSoFar` at the end of the text.
fn match_bounded(count: usize, child: &Node, text: &[char], pos: usize) -> MatchResult {
    let mut pos = pos;
    for _ in 0..count {
        let result = match_node(child, text, pos);
        if !result.status.is_ok() {
            return result;
        }
        if result.index == pos {
            break; // no progress
        }
        pos = result.index;
    }
    MatchResult::ok(pos)
}

/// `{a,b,...}`: the first alternative that is not `NotOk` wins.
fn match_grouping(groups: &[Group], text: &[char], pos: usize) -> MatchResult {
    if groups.is_empty() {
        return MatchResult::malformed(pos, "grouping without alternatives");
    }
    let mut furthest: Option<MatchResult> = None;
    for group in groups {
        let result = match_group(group, text, pos);
        if result.status.is_acceptable() || result.malformed {
            return result;
        }
        if furthest.as_ref().is_none_or(|f| result.index > f.index) {
            furthest = Some(result);
        }
    }
    let furthest = furthest.unwrap_or_else(|| MatchResult::not_ok(pos, ""));
    let alternatives = groups.iter().map(|g| g.source.as_str()).join(",");
    MatchResult::not_ok(
        furthest.index,
        format!(
            "no alternative of {{{alternatives}}} matched ({})",
            furthest.message.unwrap_or_default()
        ),
    )
}

/// `[a,b,...]`: like a grouping, but matching nothing is fine.
fn match_optional(groups: &[Group], text: &[char], pos: usize) -> MatchResult {
    if groups.is_empty() {
        return MatchResult::malformed(pos, "optional without alternatives");
    }
    if pos >= text.len() {
        return MatchResult::ok(pos);
    }
    for group in groups {
        let result = match_group(group, text, pos);
        if result.status.is_acceptable() || result.malformed {
            return result;
        }
    }
    MatchResult::ok(pos)
}

fn match_group(group: &Group, text: &[char], pos: usize) -> MatchResult {
    if group.nodes.is_empty() {
        return MatchResult::malformed(pos, "empty alternative");
    }
    match_sequence(&group.nodes, text, pos)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
