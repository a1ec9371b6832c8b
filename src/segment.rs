// Run compaction: groups the per-character edit script into maximal runs.
//
// Consecutive ops of the same kind collapse into one `Segment`; a kind
// change always starts a new segment and ops are never reordered, so the
// round-trip property of the edit script carries over to the segment list.

use std::fmt;

use crate::align::{Op, OpKind};

/// Kind of a diff segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Text present in both sequences.
    Unchanged,
    /// Text present only in the first sequence.
    Deleted,
    /// Text present only in the second sequence.
    Inserted,
}

impl SegmentKind {
    /// Lowercase name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Deleted => "deleted",
            Self::Inserted => "inserted",
        }
    }
}

impl From<OpKind> for SegmentKind {
    fn from(kind: OpKind) -> Self {
        match kind {
            OpKind::Equal => Self::Unchanged,
            OpKind::Delete => Self::Deleted,
            OpKind::Insert => Self::Inserted,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of same-kind edits.
///
/// `position` is an index into the first sequence for `Unchanged` and
/// `Deleted` segments and into the second sequence for `Inserted` ones.
/// Positions and lengths count Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    kind: SegmentKind,
    position: usize,
    len: usize,
}

impl Segment {
    pub(crate) fn new(kind: SegmentKind, text: String, position: usize) -> Self {
        let len = text.chars().count();
        Self {
            text,
            kind,
            position,
            len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of characters in `text`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// Ordered, immutable list of diff segments.
///
/// Cheap to iterate any number of times; iteration yields segments in the
/// order that reconstructs both inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    inner: Vec<Segment>,
}

impl Segments {
    pub(crate) fn from_vec(inner: Vec<Segment>) -> Self {
        Self { inner }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.inner
    }

    /// Concatenated text of all non-inserted segments: the first sequence.
    pub fn old_text(&self) -> String {
        self.collect_except(SegmentKind::Inserted)
    }

    /// Concatenated text of all non-deleted segments: the second sequence.
    pub fn new_text(&self) -> String {
        self.collect_except(SegmentKind::Deleted)
    }

    fn collect_except(&self, skip: SegmentKind) -> String {
        self.inner
            .iter()
            .filter(|s| s.kind != skip)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Character counts per kind.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats {
            segments: self.inner.len(),
            ..DiffStats::default()
        };
        for s in &self.inner {
            match s.kind {
                SegmentKind::Unchanged => stats.unchanged += s.len,
                SegmentKind::Deleted => stats.deleted += s.len,
                SegmentKind::Inserted => stats.inserted += s.len,
            }
        }
        stats
    }
}

impl IntoIterator for Segments {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Summary of a diff, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Characters shared by both sequences.
    pub unchanged: usize,
    /// Characters only in the first sequence.
    pub deleted: usize,
    /// Characters only in the second sequence.
    pub inserted: usize,
    /// Number of segments.
    pub segments: usize,
}

impl DiffStats {
    /// Number of single-character edits (deletions plus insertions).
    pub fn edit_distance(&self) -> usize {
        self.deleted + self.inserted
    }
}

// ---------------------------------------------------------------------------
// Compaction
// ---------------------------------------------------------------------------

/// Collapse an edit script into maximal same-kind runs.
pub fn compact(ops: &[Op]) -> Segments {
    let mut segments: Vec<Segment> = Vec::new();
    let mut old_pos = 0usize;
    let mut new_pos = 0usize;

    let mut i = 0;
    while i < ops.len() {
        let kind = ops[i].kind;
        let position = ops[i].index;
        let mut text = String::new();

        while i < ops.len() && ops[i].kind == kind {
            let op = &ops[i];
            match kind {
                OpKind::Equal => {
                    debug_assert_eq!(op.index, old_pos, "equal op out of sequence");
                    old_pos += 1;
                    new_pos += 1;
                }
                OpKind::Delete => {
                    debug_assert_eq!(op.index, old_pos, "delete op out of sequence");
                    old_pos += 1;
                }
                OpKind::Insert => {
                    debug_assert_eq!(op.index, new_pos, "insert op out of sequence");
                    new_pos += 1;
                }
            }
            text.push(op.ch);
            i += 1;
        }

        debug_assert!(!text.is_empty(), "compaction produced an empty run");
        log::trace!("run {kind:?} at {position}: {} chars", text.chars().count());
        segments.push(Segment::new(kind.into(), text, position));
    }

    Segments::from_vec(segments)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
