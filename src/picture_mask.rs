//! The host-facing holder for an active picture mask.

use std::sync::Arc;

use crate::mask::{Mask, MaskError, MatchResult, compile};

/// Owns the currently active compiled mask.
///
/// The tree is held behind an [`Arc`]: [`PictureMask::mask`] hands out shared
/// references that stay valid after the mask is replaced, and replacing it
/// never touches a tree someone else is still matching against.
#[derive(Debug, Clone, Default)]
pub struct PictureMask {
    active: Option<Arc<Mask>>,
}

impl PictureMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mask(pattern: &str) -> Result<Self, MaskError> {
        let mut pm = Self::new();
        pm.set_mask(pattern)?;
        Ok(pm)
    }

    /// Compile `pattern` and make it the active mask.
    ///
    /// On error the previously active mask, if any, stays in place.
    pub fn set_mask(&mut self, pattern: &str) -> Result<Arc<Mask>, MaskError> {
        let mask = Arc::new(compile(pattern)?);
        self.active = Some(Arc::clone(&mask));
        Ok(mask)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn mask(&self) -> Option<Arc<Mask>> {
        self.active.clone()
    }

    /// Check `candidate` against the active mask.
    pub fn check(&self, candidate: &str) -> Result<MatchResult, MaskError> {
        self.active
            .as_deref()
            .map(|mask| mask.check(candidate))
            .ok_or(MaskError::NoMask)
    }

    /// True if `candidate` satisfies the whole mask.
    pub fn is_complete(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok_and(|r| r.status.is_ok())
    }

    /// True if `candidate` is a conforming prefix, i.e. a host may accept the
    /// keystroke that produced it.
    pub fn is_acceptable_prefix(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok_and(|r| r.status.is_acceptable())
    }
}
