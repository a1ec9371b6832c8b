// Bracket-notation rendering of a segment list.
//
// Markers are fixed: "[-" text "]" for deletions, "[+" text "]" for
// insertions, "[=" len "]" for a compacted unchanged run. Input text is
// written as-is; bracket characters inside it are not escaped.

use std::fmt::{self, Write};

use super::mode::Mode;
use crate::segment::{Segment, SegmentKind};

/// Render `segments` in the notation selected by `mode`.
pub fn render(segments: &[Segment], mode: Mode) -> String {
    let mut out = String::with_capacity(estimate_len(segments));
    // Writing into a String cannot fail.
    let _ = render_into(&mut out, segments, mode);
    out
}

/// Render into any `fmt::Write` sink.
pub fn render_into<W: Write>(out: &mut W, segments: &[Segment], mode: Mode) -> fmt::Result {
    for seg in segments {
        debug_assert!(!seg.is_empty(), "zero-length segment reached the renderer");
        if seg.is_empty() {
            continue;
        }
        match seg.kind() {
            SegmentKind::Unchanged if mode.compacts(seg.len()) => {
                write!(out, "[={}]", seg.len())?;
            }
            SegmentKind::Unchanged => out.write_str(seg.text())?,
            SegmentKind::Deleted => {
                out.write_str("[-")?;
                out.write_str(seg.text())?;
                out.write_char(']')?;
            }
            SegmentKind::Inserted => {
                out.write_str("[+")?;
                out.write_str(seg.text())?;
                out.write_char(']')?;
            }
        }
    }
    Ok(())
}

fn estimate_len(segments: &[Segment]) -> usize {
    segments.iter().map(|s| s.text().len() + 3).sum()
}
