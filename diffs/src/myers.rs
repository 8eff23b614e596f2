use crate::DiffCallback;

/// Greedy Myers diff over the callback's item identity.
///
/// Returns for every old position the new position it was matched to, or
/// `None` when the item is not part of the common subsequence. Runs in
/// O((N + M) * D) time; the backtracking trace keeps only the active
/// `[-d, d]` band of each round, so the extra space is O(D^2).
pub(crate) fn match_table(cb: &impl DiffCallback) -> Vec<Option<usize>> {
    let n = cb.old_len();
    let m = cb.new_len();
    let mut matched = vec![None; n];

    if n == 0 || m == 0 {
        return matched;
    }

    let max = (n + m) as isize;
    let offset = max;
    // v[k + offset] holds the furthest x reached on diagonal k
    let mut v = vec![0isize; (2 * max + 1) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();
    let mut final_d = None;

    'search: for d in 0..=max {
        trace.push(v[(offset - d) as usize..=(offset + d) as usize].to_vec());

        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            while (x as usize) < n && (y as usize) < m && cb.items_same(x as usize, y as usize) {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x as usize >= n && y as usize >= m {
                final_d = Some(d);
                break 'search;
            }

            k += 2;
        }
    }

    let final_d = match final_d {
        Some(d) => d,
        // d = n + m always reaches the sink
        None => return matched,
    };

    let mut x = n as isize;
    let mut y = m as isize;

    for d in (0..=final_d).rev() {
        let row = &trace[d as usize];
        let at = |k: isize| row[(k + d) as usize];
        let k = x - y;
        let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = if d > 0 { at(prev_k) } else { 0 };
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            matched[(x - 1) as usize] = Some((y - 1) as usize);
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            x = prev_x;
            y = prev_y;
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeyDiff<'a> {
        old: &'a [u32],
        new: &'a [u32],
    }

    impl DiffCallback for KeyDiff<'_> {
        fn old_len(&self) -> usize {
            self.old.len()
        }

        fn new_len(&self) -> usize {
            self.new.len()
        }

        fn items_same(&self, old_pos: usize, new_pos: usize) -> bool {
            self.old[old_pos] == self.new[new_pos]
        }

        fn contents_same(&self, _old_pos: usize, _new_pos: usize) -> bool {
            true
        }
    }

    fn table(old: &[u32], new: &[u32]) -> Vec<Option<usize>> {
        match_table(&KeyDiff { old, new })
    }

    #[test]
    fn test_identical_sequences_match_fully() {
        let keys = [1, 2, 3, 4];

        let matched = table(&keys, &keys);

        assert_eq!(matched, vec![Some(0), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_empty_sides() {
        assert!(table(&[], &[1, 2]).is_empty());
        assert_eq!(table(&[1, 2], &[]), vec![None, None]);
    }

    #[test]
    fn test_disjoint_sequences_match_nothing() {
        let matched = table(&[1, 2, 3], &[4, 5]);

        assert_eq!(matched, vec![None, None, None]);
    }

    #[test]
    fn test_common_subsequence_is_maximal() {
        // LCS of these is [2, 3, 5], so exactly one old item stays unmatched
        let matched = table(&[1, 2, 3, 5], &[2, 3, 9, 5]);

        assert_eq!(matched[0], None);
        assert_eq!(matched[1], Some(0));
        assert_eq!(matched[2], Some(1));
        assert_eq!(matched[3], Some(3));
    }

    #[test]
    fn test_matched_pairs_keep_relative_order() {
        let old: Vec<u32> = (0..30).collect();
        let new: Vec<u32> = (0..30).rev().collect();

        let matched = table(&old, &new);
        let pairs: Vec<usize> = matched.iter().filter_map(|m| *m).collect();

        // a common subsequence of a sequence and its reverse has length 1
        assert_eq!(pairs.len(), 1);
    }
}
