//! Hash-chain match finder.
//!
//! Every position `i` is linked to the previous position that starts with
//! the same two bytes. The links are stored as backward distances in a
//! single `offsets` array, so walking a chain is just repeated subtraction:
//!
//! ```text
//! input:    a b c a b d a b
//! offsets:  0 0 0 3 0 0 3 0
//!                 ^     ^
//!                 |     └─ "ab" at 6 links back to 3
//!                 └─────── "ab" at 3 links back to 0
//! ```
//!
//! A zero offset terminates the chain. Offsets only ever point to strictly
//! smaller positions, so every walk terminates.

use crate::config::LzssConfig;

/// Sentinel for an empty hash bucket. Position 0 is a valid position.
const EMPTY: usize = usize::MAX;

/// A candidate back-reference found by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCandidate {
    /// Distance back from the current position.
    pub distance: usize,
    /// Number of matching bytes, 0 if nothing was found.
    pub length: usize,
}

impl MatchCandidate {
    /// No match.
    pub const NONE: Self = Self {
        distance: 0,
        length: 0,
    };

    /// Whether this candidate is long enough to be emitted as a back-reference.
    ///
    /// Shorter matches cost at least as much as the literals they replace.
    pub fn is_encodable(&self) -> bool {
        self.length >= LzssConfig::MIN_MATCH
    }
}

/// Link every 2-byte prefix to its previous occurrence.
///
/// Returns one entry per input byte: the distance to the nearest earlier
/// position with the same prefix, or 0 when there is none. The last entry is
/// always 0 since a single trailing byte has no 2-byte prefix.
pub fn link_matches(data: &[u8]) -> Vec<usize> {
    let mut buckets = vec![EMPTY; LzssConfig::HASH_TABLE_SIZE];
    let mut offsets = vec![0usize; data.len()];

    for (i, pair) in data.windows(2).enumerate() {
        let key = (pair[0] as usize) << 8 | pair[1] as usize;
        let prev = buckets[key];
        if prev != EMPTY {
            offsets[i] = i - prev;
        }
        buckets[key] = i;
    }

    offsets
}

/// Longest-match search over a linked input buffer.
#[derive(Debug)]
pub struct MatchFinder<'a> {
    /// The input being compressed.
    data: &'a [u8],
    /// Backward links produced by [`link_matches`].
    offsets: Vec<usize>,
}

impl<'a> MatchFinder<'a> {
    /// Index `data` for matching.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offsets: link_matches(data),
        }
    }

    /// The backward link table.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Input length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Count equal bytes starting at `i` and `j` (`i < j`), capped at
    /// `MAX_MATCH` and at the end of input.
    ///
    /// The compared ranges may overlap, which is what lets a short period
    /// (e.g. a run of one byte) match at distance 1.
    #[inline]
    pub fn match_length(&self, i: usize, j: usize) -> usize {
        let limit = LzssConfig::MAX_MATCH.min(self.data.len() - j);
        let mut n = 0;
        while n < limit && self.data[i + n] == self.data[j + n] {
            n += 1;
        }
        n
    }

    /// Find the longest match for position `j` within the window.
    ///
    /// Candidates are visited nearest first, and only a strictly longer match
    /// replaces the current best, so ties resolve to the smallest distance.
    pub fn longest_match(&self, j: usize) -> MatchCandidate {
        let first = self.offsets[j];
        if first == 0 {
            return MatchCandidate::NONE;
        }

        let mut best = MatchCandidate::NONE;
        let mut i = j - first;
        while j - i <= LzssConfig::WINDOW_SIZE {
            let n = self.match_length(i, j);
            if n > best.length {
                best = MatchCandidate {
                    distance: j - i,
                    length: n,
                };
                // Cannot be improved.
                if n == LzssConfig::MAX_MATCH {
                    break;
                }
            }

            let link = self.offsets[i];
            if link == 0 {
                break;
            }
            i -= link;
        }

        best
    }
}
