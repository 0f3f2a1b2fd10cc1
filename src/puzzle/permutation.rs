//! Permutation enumeration
//!
//! Iterative Heap's algorithm. Every ordering of the input is produced once
//! per position arrangement, so repeated values yield repeated orderings.

/// Lazy iterator over all `n!` orderings of a sequence
///
/// # Examples
/// ```
/// use three_words::puzzle::Permutations;
///
/// let all: Vec<Vec<char>> = Permutations::new(vec!['A', 'B', 'C']).collect();
/// assert_eq!(all.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
}

impl<T: Clone> Permutations<T> {
    /// Start enumerating orderings of `items`
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            index: 1,
            started: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }

        while self.index < self.items.len() {
            let i = self.index;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.index = 1;
                return Some(self.items.clone());
            }
            self.counters[i] = 0;
            self.index += 1;
        }

        None
    }
}

/// Materialize every ordering of `items`
#[must_use]
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    Permutations::new(items.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: usize) -> usize {
        (1..=n).product()
    }

    /// Reference enumeration: pick each remaining index in turn
    fn brute_force(items: &[u8]) -> Vec<Vec<u8>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in brute_force(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn count_is_factorial() {
        for n in 1..=8 {
            let items: Vec<usize> = (0..n).collect();
            assert_eq!(Permutations::new(items).count(), factorial(n), "n = {n}");
        }
    }

    #[test]
    fn matches_brute_force_multiset() {
        for n in 1..=6 {
            let items: Vec<u8> = (0..n).collect();
            let mut ours = permutations(&items);
            let mut expected = brute_force(&items);
            ours.sort();
            expected.sort();
            assert_eq!(ours, expected, "n = {n}");
        }
    }

    #[test]
    fn matches_brute_force_with_repeats() {
        let items = [b'P', b'P', b'A', b'P', b'M', b'G'];
        let mut ours = permutations(&items);
        let mut expected = brute_force(&items);
        ours.sort();
        expected.sort();
        assert_eq!(ours.len(), 720);
        assert_eq!(ours, expected);
    }

    #[test]
    fn distinct_input_gives_distinct_orderings() {
        let mut all = permutations(&['A', 'B', 'C', 'D', 'E']);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 120);
    }

    #[test]
    fn repeated_values_are_not_deduplicated() {
        let all = permutations(&['A', 'A']);
        assert_eq!(all, vec![vec!['A', 'A'], vec!['A', 'A']]);
    }

    #[test]
    fn single_element() {
        assert_eq!(permutations(&['Z']), vec![vec!['Z']]);
    }

    #[test]
    fn every_ordering_has_input_length() {
        assert!(
            Permutations::new(vec![1, 2, 3, 4])
                .all(|p| p.len() == 4)
        );
    }
}
