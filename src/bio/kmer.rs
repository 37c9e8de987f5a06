//! Overlapping k-mer tokenization.

/// Iterator over the overlapping k-mers of a sequence, left to right.
///
/// Slices are taken on character boundaries, so unvalidated non-ASCII input
/// yields meaningless tokens rather than a panic.
pub struct Kmers<'a> {
    seq: &'a str,
    k: usize,
    start: usize,
    // Char start offsets plus `seq.len()`; `None` for ASCII input.
    bounds: Option<Vec<usize>>,
}

impl<'a> Kmers<'a> {
    pub fn new(seq: &'a str, k: usize) -> Self {
        let bounds = if seq.is_ascii() {
            None
        } else {
            Some(
                seq.char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(seq.len()))
                    .collect(),
            )
        };
        Self {
            seq,
            k,
            start: 0,
            bounds,
        }
    }

    fn char_len(&self) -> usize {
        match &self.bounds {
            Some(bounds) => bounds.len() - 1,
            None => self.seq.len(),
        }
    }

    fn offset(&self, index: usize) -> usize {
        match &self.bounds {
            Some(bounds) => bounds[index],
            None => index,
        }
    }

    fn remaining(&self) -> usize {
        if self.k == 0 {
            return 0;
        }
        (self.char_len() + 1).saturating_sub(self.k.saturating_add(self.start))
    }
}

impl<'a> Iterator for Kmers<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let from = self.offset(self.start);
        let to = self.offset(self.start + self.k);
        self.start += 1;
        Some(&self.seq[from..to])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Kmers<'_> {}

/// All `len - k + 1` k-mers of `seq`; empty when `seq` is shorter than `k`
/// or `k` is zero.
pub fn extract_kmers(seq: &str, k: usize) -> Vec<&str> {
    Kmers::new(seq, k).collect()
}

/// K-mers joined by single spaces, the token form fed to the vectorizer.
pub fn kmer_string(seq: &str, k: usize) -> String {
    let kmers = Kmers::new(seq, k);
    let mut out = String::with_capacity(kmers.len().saturating_mul(k.saturating_add(1)));
    for (i, kmer) in kmers.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(kmer);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_extract_kmers_example() {
        assert_eq!(
            extract_kmers("ATCGATCG", 3),
            vec!["ATC", "TCG", "CGA", "GAT", "ATC", "TCG"]
        );
    }

    #[test_case("ACGT", 4, 1 ; "exact length")]
    #[test_case("ACGT", 5, 0 ; "longer than sequence")]
    #[test_case("ACGT", 1, 4 ; "single bases")]
    #[test_case("", 3, 0 ; "empty sequence")]
    #[test_case("ACGT", 0, 0 ; "zero k")]
    fn test_kmer_count(seq: &str, k: usize, expected: usize) {
        assert_eq!(extract_kmers(seq, k).len(), expected);
        assert_eq!(Kmers::new(seq, k).len(), expected);
    }

    #[test]
    fn test_kmer_string() {
        assert_eq!(kmer_string("ACGTA", 4), "ACGT CGTA");
        assert_eq!(kmer_string("AC", 4), "");
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert_eq!(extract_kmers("AéCG", 2), vec!["Aé", "éC", "CG"]);
    }
}
