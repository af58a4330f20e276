//! LCP array and LCP-interval enumeration
//!
//! The LCP array stores, for each suffix-array position `i > 0`, the length
//! of the longest common prefix between the suffixes at positions `i - 1`
//! and `i`. LCP intervals (the internal nodes of the implicit suffix tree)
//! are enumerated from it with a monotonic stack: each maximal run of
//! suffix-array positions whose pairwise LCP stays at or above some depth
//! becomes one node. Nodes are emitted children-before-parents, so deeper
//! intervals always precede the shallower intervals that contain them.

use super::types::TextPosition;

/// LCP-interval tree encoded as parallel arrays indexed by node id
///
/// Node `i` covers the half-open suffix-array range
/// `[left[i], right[i])`, whose suffixes share a prefix of length
/// `depth[i]`. Leaves (single suffixes) are not materialized, and neither
/// is the depth-0 root interval.
#[derive(Debug, Default)]
pub struct LcpIntervalTree {
    pub left: Vec<TextPosition>,
    pub right: Vec<TextPosition>,
    pub depth: Vec<TextPosition>,
}

impl LcpIntervalTree {
    /// Total internal node count
    pub fn node_count(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    fn push(&mut self, left: TextPosition, right: TextPosition, depth: TextPosition) {
        self.left.push(left);
        self.right.push(right);
        self.depth.push(depth);
    }
}

/// Compute the LCP array with Kasai's algorithm in O(n)
///
/// `lcp[0]` is 0 by convention; `lcp[i]` is the common prefix length of
/// the suffixes at suffix-array positions `i - 1` and `i`.
pub fn lcp_array(text: &[u8], sa: &[TextPosition]) -> Vec<TextPosition> {
    let n = text.len();
    let mut lcp = vec![0 as TextPosition; n];
    if n == 0 {
        return lcp;
    }

    let mut rank = vec![0 as TextPosition; n];
    for (i, &p) in sa.iter().enumerate() {
        rank[p as usize] = i as TextPosition;
    }

    let mut h = 0usize;
    for pos in 0..n {
        let r = rank[pos] as usize;
        if r == 0 {
            h = 0;
            continue;
        }
        let prev = sa[r - 1] as usize;
        while pos + h < n && prev + h < n && text[pos + h] == text[prev + h] {
            h += 1;
        }
        lcp[r] = h as TextPosition;
        h = h.saturating_sub(1);
    }

    lcp
}

/// Enumerate LCP intervals with a monotonic stack in O(n)
pub fn lcp_intervals(lcp: &[TextPosition]) -> LcpIntervalTree {
    let n = lcp.len();
    let mut tree = LcpIntervalTree::default();
    if n == 0 {
        return tree;
    }

    // (depth, left boundary); the depth-0 sentinel entry is never popped
    let mut stack: Vec<(TextPosition, TextPosition)> = vec![(0, 0)];

    for i in 1..=n {
        let current = if i < n { lcp[i] } else { 0 };
        let mut left = (i - 1) as TextPosition;

        while current < stack.last().map(|&(d, _)| d).unwrap_or(0) {
            let (depth, interval_left) = stack.pop().unwrap_or((0, 0));
            tree.push(interval_left, i as TextPosition, depth);
            left = interval_left;
        }
        if current > stack.last().map(|&(d, _)| d).unwrap_or(0) {
            stack.push((current, left));
        }
    }

    tree
}
