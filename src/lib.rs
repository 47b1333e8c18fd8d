//! Picture masks: compile an input-shape mask once, then classify candidate
//! text against it as it is typed.
//!
//! # Example
//!
//! ```rust
//! use picmask::{MatchStatus, PictureMask};
//!
//! let mut pm = PictureMask::new();
//! pm.set_mask("(###) ###-####").unwrap();
//!
//! assert_eq!(pm.check("(555) 123-4567").unwrap().status, MatchStatus::Ok);
//! assert_eq!(pm.check("(555) 12").unwrap().status, MatchStatus::OkSoFar);
//!
//! let rejected = pm.check("(55a").unwrap();
//! assert_eq!(rejected.status, MatchStatus::NotOk);
//! assert_eq!(rejected.index, 3);
//! ```

pub mod mask;
mod picture_mask;

pub use mask::{MaskError, MatchResult, MatchStatus, check, compile};
pub use mask::{ClassKind, Group, Mask, Node, NodeKind};
pub use picture_mask::PictureMask;
