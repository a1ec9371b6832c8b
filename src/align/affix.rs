// Common prefix/suffix detection.
//
// Shared leading and trailing runs never need the quadratic table: they are
// always part of some longest common subsequence, so the aligner only has to
// look at what lies between them.

/// Length of the longest common prefix of `a` and `b`.
pub fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the longest common suffix of `a` and `b`.
pub fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Split points for an aligned pair.
///
/// `prefix` characters at the front and `suffix` characters at the back are
/// shared by both inputs. The suffix never overlaps the prefix, so
/// `prefix + suffix <= min(a.len(), b.len())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affixes {
    pub prefix: usize,
    pub suffix: usize,
}

impl Affixes {
    /// Measure the shared prefix, then the shared suffix of what remains.
    pub fn measure(a: &[char], b: &[char]) -> Self {
        let prefix = common_prefix(a, b);
        let suffix = common_suffix(&a[prefix..], &b[prefix..]);
        Self { prefix, suffix }
    }

    /// The divergent middle of `s`.
    #[inline]
    pub fn middle<'a>(&self, s: &'a [char]) -> &'a [char] {
        &s[self.prefix..s.len() - self.suffix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn prefix_and_suffix() {
        let a = chars("hello world");
        let b = chars("hello there world");
        assert_eq!(common_prefix(&a, &b), 6);
        assert_eq!(common_suffix(&a, &b), 6);
    }

    #[test]
    fn suffix_does_not_overlap_prefix() {
        // "aa" vs "aaa": the whole of `a` is a prefix of `b`; nothing is
        // left over to count as suffix.
        let a = chars("aa");
        let b = chars("aaa");
        let aff = Affixes::measure(&a, &b);
        assert_eq!(aff, Affixes { prefix: 2, suffix: 0 });
        assert!(aff.middle(&a).is_empty());
        assert_eq!(aff.middle(&b), &['a']);
    }

    #[test]
    fn disjoint_inputs_have_no_affixes() {
        let a = chars("abc");
        let b = chars("xyz");
        let aff = Affixes::measure(&a, &b);
        assert_eq!(aff, Affixes { prefix: 0, suffix: 0 });
        assert_eq!(aff.middle(&a), a.as_slice());
    }

    #[test]
    fn identical_inputs_are_all_prefix() {
        let a = chars("same");
        let aff = Affixes::measure(&a, &a);
        assert_eq!(aff, Affixes { prefix: 4, suffix: 0 });
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(common_prefix(&[], &chars("abc")), 0);
        assert_eq!(common_suffix(&chars("abc"), &[]), 0);
    }
}
