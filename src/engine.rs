// Diff engine: the public entry points.
//
// Handles the absent/empty cases, then runs:
//   - Alignment (align module) to get a per-character edit script
//   - Run compaction (segment module) to group it into segments
//   - Rendering (render module) for the string-producing entry points

use crate::align;
use crate::error::DiffError;
use crate::render::{self, Mode};
use crate::segment::{self, Segment, SegmentKind, Segments};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the aligner.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Strip the shared prefix and suffix before building the LCS table.
    /// Cuts table size to the divergent middle; output stays a valid,
    /// minimal edit script either way.
    pub strip_affixes: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            strip_affixes: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// Segment list for `first` -> `second`.
///
/// Empty when both inputs are absent or both are empty. An absent side is
/// treated as if the other side were entirely inserted or deleted.
pub fn diff_segments(first: Option<&str>, second: Option<&str>) -> Segments {
    diff_segments_with_options(first, second, &DiffOptions::default())
}

/// [`diff_segments`] with explicit options.
pub fn diff_segments_with_options(
    first: Option<&str>,
    second: Option<&str>,
    opts: &DiffOptions,
) -> Segments {
    match (first, second) {
        (None, None) => {
            log::debug!("diff: both inputs absent");
            Segments::default()
        }
        (None, Some(new)) => {
            log::debug!("diff: first input absent, {} bytes inserted", new.len());
            whole(SegmentKind::Inserted, new)
        }
        (Some(old), None) => {
            log::debug!("diff: second input absent, {} bytes deleted", old.len());
            whole(SegmentKind::Deleted, old)
        }
        (Some(old), Some(new)) => {
            let old: Vec<char> = old.chars().collect();
            let new: Vec<char> = new.chars().collect();
            let ops = align::align(&old, &new, opts);
            segment::compact(&ops)
        }
    }
}

fn whole(kind: SegmentKind, text: &str) -> Segments {
    if text.is_empty() {
        return Segments::default();
    }
    Segments::from_vec(vec![Segment::new(kind, text.to_string(), 0)])
}

// ---------------------------------------------------------------------------
// Rendered diff
// ---------------------------------------------------------------------------

/// Rendered diff of `first` -> `second`.
///
/// Returns `None` when both inputs are absent, or when `mode` is given but is
/// not a recognized selector. `mode = None` renders in full.
pub fn diff(first: Option<&str>, second: Option<&str>, mode: Option<&str>) -> Option<String> {
    match try_diff(first, second, mode) {
        Ok(out) => out,
        Err(e) => {
            log::warn!("diff: {e}");
            None
        }
    }
}

/// Like [`diff`], but reports an unsupported mode as an error.
///
/// `Ok(None)` still means both inputs were absent.
pub fn try_diff(
    first: Option<&str>,
    second: Option<&str>,
    mode: Option<&str>,
) -> Result<Option<String>, DiffError> {
    let mode = Mode::resolve(mode)?;
    Ok(diff_with_mode(first, second, mode, &DiffOptions::default()))
}

/// Rendered diff with an already-parsed mode and explicit options.
pub fn diff_with_mode(
    first: Option<&str>,
    second: Option<&str>,
    mode: Mode,
    opts: &DiffOptions,
) -> Option<String> {
    if first.is_none() && second.is_none() {
        return None;
    }
    let segments = diff_segments_with_options(first, second, opts);
    log::debug!("diff: {} segments, mode {mode}", segments.len());
    Some(render::render(segments.as_slice(), mode))
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// Render many pairs with one mode. Results keep input order.
///
/// The mode is parsed once; an invalid mode fails the whole batch. With the
/// `parallel` feature the pairs are diffed on the rayon thread pool.
pub fn diff_batch(
    pairs: &[(Option<&str>, Option<&str>)],
    mode: Option<&str>,
) -> Result<Vec<Option<String>>, DiffError> {
    let mode = Mode::resolve(mode)?;
    let opts = DiffOptions::default();
    let one = |&(a, b): &(Option<&str>, Option<&str>)| diff_with_mode(a, b, mode, &opts);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(pairs.par_iter().map(one).collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(pairs.iter().map(one).collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModeError;

    #[test]
    fn both_absent() {
        assert_eq!(diff(None, None, None), None);
        assert!(diff_segments(None, None).is_empty());
    }

    #[test]
    fn both_empty() {
        assert_eq!(diff(Some(""), Some(""), None), Some(String::new()));
        assert!(diff_segments(Some(""), Some("")).is_empty());
    }

    #[test]
    fn absent_and_empty_render_alike() {
        assert_eq!(diff(None, Some("xyz"), None).as_deref(), Some("[+xyz]"));
        assert_eq!(diff(Some(""), Some("xyz"), None).as_deref(), Some("[+xyz]"));
        assert_eq!(diff(Some("xyz"), None, None).as_deref(), Some("[-xyz]"));
        assert_eq!(diff(Some("xyz"), Some(""), None).as_deref(), Some("[-xyz]"));
    }

    #[test]
    fn absent_side_with_empty_other() {
        assert_eq!(diff(None, Some(""), None), Some(String::new()));
        assert!(diff_segments(Some(""), None).is_empty());
    }

    #[test]
    fn whole_segment_position() {
        let segs = diff_segments(None, Some("abc"));
        let s = &segs.as_slice()[0];
        assert_eq!(s.kind(), SegmentKind::Inserted);
        assert_eq!(s.position(), 0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn invalid_mode_is_absent() {
        assert_eq!(diff(Some("abc"), Some("xyz"), Some("FULL")), None);
        assert_eq!(
            try_diff(Some("abc"), Some("xyz"), Some("full:0")),
            Err(DiffError::InvalidMode(ModeError::InvalidThreshold(
                "full:0".to_string()
            )))
        );
    }

    #[test]
    fn invalid_mode_with_absent_inputs() {
        assert_eq!(diff(None, None, Some("bogus")), None);
        assert!(try_diff(None, None, Some("bogus")).is_err());
        assert_eq!(try_diff(None, None, Some("full")), Ok(None));
    }

    #[test]
    fn run_maximality() {
        assert_eq!(
            diff(Some("aXYZb"), Some("aABCb"), Some("full")).as_deref(),
            Some("a[-XYZ][+ABC]b")
        );
    }

    #[test]
    fn identity() {
        let s = "The quick brown fox";
        assert_eq!(diff(Some(s), Some(s), Some("full")).as_deref(), Some(s));
    }

    #[test]
    fn segment_positions() {
        let segs = diff_segments(Some("hello world"), Some("hello there world"));
        let summary: Vec<_> = segs
            .iter()
            .map(|s| (s.kind(), s.text().to_string(), s.position()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (SegmentKind::Unchanged, "hello ".to_string(), 0),
                (SegmentKind::Inserted, "there ".to_string(), 6),
                (SegmentKind::Unchanged, "world".to_string(), 6),
            ]
        );
    }

    #[test]
    fn options_without_stripping_still_roundtrip() {
        let opts = DiffOptions {
            strip_affixes: false,
        };
        let segs = diff_segments_with_options(Some("aaXbb"), Some("aaYbb"), &opts);
        assert_eq!(segs.old_text(), "aaXbb");
        assert_eq!(segs.new_text(), "aaYbb");
        assert_eq!(
            diff_with_mode(Some("aaXbb"), Some("aaYbb"), Mode::Compact, &opts).as_deref(),
            Some("[=2][-X][+Y][=2]")
        );
    }

    #[test]
    fn batch_keeps_order() {
        let pairs = [
            (Some("abc"), Some("abd")),
            (None, None),
            (None, Some("x")),
        ];
        let out = diff_batch(&pairs, Some("full")).unwrap();
        assert_eq!(
            out,
            vec![Some("ab[-c][+d]".to_string()), None, Some("[+x]".to_string())]
        );
        assert!(diff_batch(&pairs, Some("full:x")).is_err());
    }
}
