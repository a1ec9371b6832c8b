// Character alignment: computes a minimal edit script between two sequences.
//
// This module provides:
// - `affix` - shared prefix/suffix stripping that bounds the quadratic cost
// - `lcs`   - the flat LCS table and its iterative backtrace
//
// `align()` ties them together and returns one `Op` per character of the
// edit script, in the order that reconstructs both inputs.

pub mod affix;
pub mod lcs;

use crate::engine::DiffOptions;

use self::affix::Affixes;
use self::lcs::LcsTable;

/// What an edit-script step does with its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Present in both sequences.
    Equal,
    /// Present only in the first sequence.
    Delete,
    /// Present only in the second sequence.
    Insert,
}

/// A single edit-script step.
///
/// `index` points into the first sequence for `Equal` and `Delete`, and into
/// the second sequence for `Insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Op {
    pub kind: OpKind,
    pub ch: char,
    pub index: usize,
}

impl Op {
    fn equal(ch: char, index: usize) -> Self {
        Self {
            kind: OpKind::Equal,
            ch,
            index,
        }
    }
}

/// Compute the edit script turning `old` into `new`.
pub fn align(old: &[char], new: &[char], opts: &DiffOptions) -> Vec<Op> {
    if old.is_empty() {
        return new
            .iter()
            .enumerate()
            .map(|(index, &ch)| Op {
                kind: OpKind::Insert,
                ch,
                index,
            })
            .collect();
    }
    if new.is_empty() {
        return old
            .iter()
            .enumerate()
            .map(|(index, &ch)| Op {
                kind: OpKind::Delete,
                ch,
                index,
            })
            .collect();
    }
    if old == new {
        return old
            .iter()
            .enumerate()
            .map(|(index, &ch)| Op::equal(ch, index))
            .collect();
    }

    let affixes = if opts.strip_affixes {
        Affixes::measure(old, new)
    } else {
        Affixes {
            prefix: 0,
            suffix: 0,
        }
    };
    let (old_mid, new_mid) = (affixes.middle(old), affixes.middle(new));

    let table = LcsTable::build(old_mid, new_mid);
    log::debug!(
        "align: old={} new={} prefix={} suffix={} table_cells={} lcs={}",
        old.len(),
        new.len(),
        affixes.prefix,
        affixes.suffix,
        table.cell_count(),
        table.lcs_len() + affixes.prefix + affixes.suffix
    );

    let mut ops = Vec::with_capacity(old.len() + new.len());
    ops.extend(
        old[..affixes.prefix]
            .iter()
            .enumerate()
            .map(|(index, &ch)| Op::equal(ch, index)),
    );
    table.backtrace(old_mid, new_mid, affixes.prefix, affixes.prefix, &mut ops);
    let tail = old.len() - affixes.suffix;
    ops.extend(
        old[tail..]
            .iter()
            .enumerate()
            .map(|(k, &ch)| Op::equal(ch, tail + k)),
    );

    ops
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
