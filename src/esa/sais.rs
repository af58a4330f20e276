//! SA-IS suffix sorting
//!
//! Linear-time suffix array construction by induced sorting (Nong, Zhang,
//! Chan). The public entry point appends a virtual sentinel smaller than
//! every byte, so the input itself needs no terminator guarantees; the
//! recursion operates on reduced strings that end with their own unique
//! smallest symbol by construction.

use super::types::{ALPHABET_SIZE, TextPosition};

const EMPTY: usize = usize::MAX;

/// Build the suffix array of `text`
///
/// Returns a permutation of `[0, n)` such that suffixes are in
/// non-decreasing lexicographic order.
pub fn build_suffix_array(text: &[u8]) -> Vec<TextPosition> {
    if text.is_empty() {
        return Vec::new();
    }

    // Shift the alphabet by one and append a unique smallest sentinel,
    // the invariant the recursive core relies on.
    let mut s: Vec<usize> = Vec::with_capacity(text.len() + 1);
    s.extend(text.iter().map(|&b| b as usize + 1));
    s.push(0);

    let sa = sais(&s, ALPHABET_SIZE + 1);

    // sa[0] is the virtual sentinel suffix; drop it
    sa[1..].iter().map(|&p| p as TextPosition).collect()
}

/// Core SA-IS over a string that ends with a unique smallest symbol 0
fn sais(s: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = s.len();
    if n == 1 {
        return vec![0];
    }
    if n == 2 {
        return vec![1, 0];
    }

    // S/L type classification, right to left
    let mut is_s = vec![false; n];
    is_s[n - 1] = true;
    for i in (0..n - 1).rev() {
        is_s[i] = s[i] < s[i + 1] || (s[i] == s[i + 1] && is_s[i + 1]);
    }

    let mut bucket = vec![0usize; alphabet_size];
    for &c in s {
        bucket[c] += 1;
    }

    // LMS positions in text order (the final sentinel is always one)
    let lms: Vec<usize> = (1..n).filter(|&i| is_s[i] && !is_s[i - 1]).collect();

    // First pass: place LMS suffixes at bucket tails in arbitrary
    // within-bucket order, then induce. This sorts the LMS substrings.
    let mut sa = vec![EMPTY; n];
    let mut tail = bucket_tails(&bucket);
    for &i in &lms {
        tail[s[i]] -= 1;
        sa[tail[s[i]]] = i;
    }
    induce(s, &mut sa, &bucket, &is_s);

    // Name LMS substrings by their induced order
    let sorted_lms: Vec<usize> = sa
        .iter()
        .copied()
        .filter(|&p| p != EMPTY && p > 0 && is_s[p] && !is_s[p - 1])
        .collect();

    let mut name_of = vec![EMPTY; n];
    let mut name = 0usize;
    let mut prev = EMPTY;
    for &p in &sorted_lms {
        if prev != EMPTY && !lms_substrings_equal(s, &is_s, prev, p) {
            name += 1;
        }
        name_of[p] = name;
        prev = p;
    }
    let name_count = name + 1;

    // Order LMS suffixes: directly if all names are distinct, otherwise
    // by recursing on the reduced string of names in text order.
    let lms_order: Vec<usize> = if name_count == lms.len() {
        sorted_lms
    } else {
        let reduced: Vec<usize> = lms.iter().map(|&i| name_of[i]).collect();
        let reduced_sa = sais(&reduced, name_count);
        reduced_sa.iter().map(|&ri| lms[ri]).collect()
    };

    // Second pass: place LMS suffixes in their true order and induce
    sa.fill(EMPTY);
    let mut tail = bucket_tails(&bucket);
    for &i in lms_order.iter().rev() {
        tail[s[i]] -= 1;
        sa[tail[s[i]]] = i;
    }
    induce(s, &mut sa, &bucket, &is_s);

    sa
}

/// Induce L-type suffixes left to right, then S-type right to left
fn induce(s: &[usize], sa: &mut [usize], bucket: &[usize], is_s: &[bool]) {
    let n = s.len();

    let mut head = bucket_heads(bucket);
    for i in 0..n {
        let p = sa[i];
        if p != EMPTY && p > 0 && !is_s[p - 1] {
            let c = s[p - 1];
            sa[head[c]] = p - 1;
            head[c] += 1;
        }
    }

    let mut tail = bucket_tails(bucket);
    for i in (0..n).rev() {
        let p = sa[i];
        if p != EMPTY && p > 0 && is_s[p - 1] {
            let c = s[p - 1];
            tail[c] -= 1;
            sa[tail[c]] = p - 1;
        }
    }
}

/// Compare two LMS substrings for exact equality
///
/// An LMS substring runs from one LMS position through the next LMS
/// position inclusive. The unique final sentinel guarantees termination.
fn lms_substrings_equal(s: &[usize], is_s: &[bool], a: usize, b: usize) -> bool {
    if a == b {
        return true;
    }
    let is_lms = |i: usize| i > 0 && is_s[i] && !is_s[i - 1];

    let mut i = 0;
    loop {
        let a_end = i > 0 && is_lms(a + i);
        let b_end = i > 0 && is_lms(b + i);
        if a_end && b_end {
            return true;
        }
        if a_end != b_end || s[a + i] != s[b + i] {
            return false;
        }
        i += 1;
    }
}

fn bucket_heads(bucket: &[usize]) -> Vec<usize> {
    let mut heads = vec![0usize; bucket.len()];
    let mut sum = 0;
    for (i, &count) in bucket.iter().enumerate() {
        heads[i] = sum;
        sum += count;
    }
    heads
}

fn bucket_tails(bucket: &[usize]) -> Vec<usize> {
    let mut tails = vec![0usize; bucket.len()];
    let mut sum = 0;
    for (i, &count) in bucket.iter().enumerate() {
        sum += count;
        tails[i] = sum;
    }
    tails
}
