// Longest-common-subsequence table and backtrace.
//
// The table is one flat buffer of (n + 1) * (m + 1) cells indexed by
// `i * width + j`, where cell [i, j] holds the LCS length of the first `i`
// characters of `a` and the first `j` characters of `b`. The backtrace is a
// plain loop from [n, m] down to [0, 0].

use super::{Op, OpKind};

/// Dense LCS length table for two character slices.
pub struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Fill the table for `a` (rows) against `b` (columns).
    pub fn build(a: &[char], b: &[char]) -> Self {
        let width = b.len() + 1;
        let mut cells = vec![0u32; (a.len() + 1) * width];

        for (i, &ca) in a.iter().enumerate() {
            let prev = i * width;
            let row = prev + width;
            for (j, &cb) in b.iter().enumerate() {
                cells[row + j + 1] = if ca == cb {
                    cells[prev + j] + 1
                } else {
                    cells[prev + j + 1].max(cells[row + j])
                };
            }
        }

        Self { width, cells }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0) as usize
    }

    /// Number of cells allocated (for diagnostics).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Trace an edit script for `a` -> `b` and append it to `out` in forward
    /// order.
    ///
    /// `old_base` and `new_base` are added to every emitted index so callers
    /// can align a sub-slice and still report positions in the full inputs.
    ///
    /// Matching characters always take the diagonal. Otherwise an Insert is
    /// preferred on ties; since the script is built back to front this puts
    /// every Delete of a divergent region ahead of its Inserts.
    pub fn backtrace(
        &self,
        a: &[char],
        b: &[char],
        old_base: usize,
        new_base: usize,
        out: &mut Vec<Op>,
    ) {
        debug_assert_eq!(self.cells.len(), (a.len() + 1) * (b.len() + 1));

        let start = out.len();
        out.reserve(a.len() + b.len() - self.lcs_len());

        let (mut i, mut j) = (a.len(), b.len());
        while i > 0 || j > 0 {
            if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                out.push(Op {
                    kind: OpKind::Equal,
                    ch: a[i - 1],
                    index: old_base + i - 1,
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || self.get(i, j - 1) >= self.get(i - 1, j)) {
                out.push(Op {
                    kind: OpKind::Insert,
                    ch: b[j - 1],
                    index: new_base + j - 1,
                });
                j -= 1;
            } else {
                out.push(Op {
                    kind: OpKind::Delete,
                    ch: a[i - 1],
                    index: old_base + i - 1,
                });
                i -= 1;
            }
        }

        out[start..].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn trace(a: &str, b: &str) -> Vec<Op> {
        let (a, b) = (chars(a), chars(b));
        let table = LcsTable::build(&a, &b);
        let mut ops = Vec::new();
        table.backtrace(&a, &b, 0, 0, &mut ops);
        ops
    }

    fn kinds(ops: &[Op]) -> String {
        ops.iter()
            .map(|op| match op.kind {
                OpKind::Equal => '=',
                OpKind::Delete => '-',
                OpKind::Insert => '+',
            })
            .collect()
    }

    #[test]
    fn lcs_length_classic() {
        let table = LcsTable::build(&chars("ABCBDAB"), &chars("BDCABA"));
        assert_eq!(table.lcs_len(), 4);
        assert_eq!(table.cell_count(), 8 * 7);
    }

    #[test]
    fn lcs_length_empty() {
        assert_eq!(LcsTable::build(&[], &chars("abc")).lcs_len(), 0);
        assert_eq!(LcsTable::build(&chars("abc"), &[]).lcs_len(), 0);
    }

    #[test]
    fn disjoint_deletes_before_inserts() {
        let ops = trace("XYZ", "ABC");
        assert_eq!(kinds(&ops), "---+++");
        let deleted: String = ops[..3].iter().map(|op| op.ch).collect();
        let inserted: String = ops[3..].iter().map(|op| op.ch).collect();
        assert_eq!(deleted, "XYZ");
        assert_eq!(inserted, "ABC");
    }

    #[test]
    fn interior_match_is_found() {
        // "b" is kept even though it sits at different offsets.
        let ops = trace("abc", "xbz");
        assert_eq!(kinds(&ops), "-+=-+");
    }

    #[test]
    fn indices_follow_their_source() {
        let ops = trace("ab", "b");
        assert_eq!(kinds(&ops), "-=");
        assert_eq!(ops[0].index, 0);
        assert_eq!(ops[1].index, 1);

        let ops = trace("b", "ab");
        assert_eq!(kinds(&ops), "+=");
        assert_eq!(ops[0].index, 0); // index into the new sequence
        assert_eq!(ops[1].index, 0); // index into the old sequence
    }

    #[test]
    fn bases_offset_indices() {
        let a = chars("x");
        let b = chars("y");
        let table = LcsTable::build(&a, &b);
        let mut ops = Vec::new();
        table.backtrace(&a, &b, 10, 20, &mut ops);
        assert_eq!(ops[0].index, 10);
        assert_eq!(ops[1].index, 20);
    }

    #[test]
    fn appends_after_existing_ops() {
        let a = chars("q");
        let b = chars("q");
        let table = LcsTable::build(&a, &b);
        let mut ops = vec![Op {
            kind: OpKind::Delete,
            ch: 'z',
            index: 0,
        }];
        table.backtrace(&a, &b, 1, 0, &mut ops);
        assert_eq!(kinds(&ops), "-=");
        assert_eq!(ops[1].index, 1);
    }
}
