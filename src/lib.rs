//! Chardiff: character-level diffing with bracket-notation output.
//!
//! The crate provides:
//! - An LCS aligner producing a minimal per-character edit script (`align`)
//! - Run compaction into maximal same-kind segments (`segment`)
//! - Rendering in `full`, `compact` and `full:N` notation (`render`)
//! - The public entry points with absent/empty handling (`engine`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! Inputs are `Option<&str>`: `None` is an absent sequence, which is not the
//! same thing as an empty one. Positions and lengths count Unicode scalar
//! values.
//!
//! # Quick Start
//!
//! ```
//! use chardiff::{diff, diff_segments};
//!
//! assert_eq!(
//!     diff(Some("aXYZb"), Some("aABCb"), None).as_deref(),
//!     Some("a[-XYZ][+ABC]b")
//! );
//! assert_eq!(
//!     diff(Some("hello world"), Some("hello there world"), Some("compact")).as_deref(),
//!     Some("[=6][+there ][=5]")
//! );
//! assert_eq!(diff(None, None, None), None);
//! assert_eq!(diff(Some("a"), Some("b"), Some("FULL")), None);
//!
//! let segments = diff_segments(Some("kitten"), Some("sitting"));
//! assert_eq!(segments.old_text(), "kitten");
//! assert_eq!(segments.new_text(), "sitting");
//! ```

pub mod align;
pub mod engine;
pub mod error;
pub mod io;
pub mod render;
pub mod segment;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::{
    DiffOptions, diff, diff_batch, diff_segments, diff_segments_with_options, diff_with_mode,
    try_diff,
};
pub use error::{DiffError, ModeError};
pub use render::Mode;
pub use segment::{DiffStats, Segment, SegmentKind, Segments};
