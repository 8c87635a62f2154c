//! Candidate mutation utilities for evolutionary search.
//!
//! Provides single-character mutation, multi-character mutation, and
//! crossover, all driven by one explicitly seeded generator.

use rand::prelude::*;

/// Printable ASCII: digits, letters, punctuation and whitespace.
pub const PRINTABLE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

/// Longest run inserted by a multi-character mutation.
const MAX_INSERT_RUN: usize = 4;

/// Random number generator wrapper for candidate operations.
pub struct CandidateRng {
    rng: StdRng,
}

impl CandidateRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Apply between one and `max_edits` single-character edits.
    ///
    /// Each edit inserts, replaces or deletes one character at a random
    /// position. An empty string can only grow.
    pub fn single_char_mutate(
        &mut self,
        candidate: &str,
        alphabet: &[char],
        max_edits: usize,
    ) -> String {
        let mut chars: Vec<char> = candidate.chars().collect();
        let edits = self.rng.gen_range(1..=max_edits.max(1));

        for _ in 0..edits {
            let op = if chars.is_empty() {
                0
            } else {
                self.rng.gen_range(0..3)
            };
            match op {
                0 => {
                    let at = self.rng.gen_range(0..=chars.len());
                    let c = self.pick(alphabet);
                    chars.insert(at, c);
                }
                1 => {
                    let at = self.rng.gen_range(0..chars.len());
                    chars[at] = self.pick(alphabet);
                }
                _ => {
                    let at = self.rng.gen_range(0..chars.len());
                    chars.remove(at);
                }
            }
        }

        chars.into_iter().collect()
    }

    /// Apply one multi-character mutation.
    ///
    /// Duplicates a random span in place, overwrites a random span with
    /// random characters, or inserts a short random run.
    pub fn multi_mutate(&mut self, candidate: &str, alphabet: &[char]) -> String {
        let mut chars: Vec<char> = candidate.chars().collect();

        let op = if chars.is_empty() {
            2
        } else {
            self.rng.gen_range(0..3)
        };
        match op {
            0 => {
                let (start, end) = self.span(chars.len());
                let copy: Vec<char> = chars[start..end].to_vec();
                chars.splice(end..end, copy);
            }
            1 => {
                let (start, end) = self.span(chars.len());
                for c in &mut chars[start..end] {
                    *c = alphabet.choose(&mut self.rng).copied().unwrap_or(*c);
                }
            }
            _ => {
                let at = self.rng.gen_range(0..=chars.len());
                let len = self.rng.gen_range(1..=MAX_INSERT_RUN);
                let run: Vec<char> = (0..len).map(|_| self.pick(alphabet)).collect();
                chars.splice(at..at, run);
            }
        }

        chars.into_iter().collect()
    }

    /// Single-point crossover with an independent cut in each parent.
    ///
    /// Returns `(a[..i] + b[j..], b[..j] + a[i..])`, so children can be
    /// longer or shorter than either parent.
    pub fn crossover(&mut self, a: &str, b: &str) -> (String, String) {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let i = self.rng.gen_range(0..=a.len());
        let j = self.rng.gen_range(0..=b.len());

        let first = a[..i].iter().chain(&b[j..]).collect();
        let second = b[..j].iter().chain(&a[i..]).collect();
        (first, second)
    }

    /// Non-empty random span `[start, end)` within `len` characters.
    fn span(&mut self, len: usize) -> (usize, usize) {
        let start = self.rng.gen_range(0..len);
        let end = self.rng.gen_range(start + 1..=len);
        (start, end)
    }

    fn pick(&mut self, alphabet: &[char]) -> char {
        alphabet.choose(&mut self.rng).copied().unwrap_or('a')
    }
}

/// The printable alphabet as characters.
pub fn printable_alphabet() -> Vec<char> {
    PRINTABLE.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_alphabet() {
        let alphabet = printable_alphabet();
        assert_eq!(alphabet.len(), 100);
        assert!(alphabet.iter().all(|c| c.is_ascii()));
    }

    #[test]
    fn test_single_char_mutate_edit_distance() {
        let mut rng = CandidateRng::new(42);
        let alphabet = printable_alphabet();
        for _ in 0..200 {
            let mutated = rng.single_char_mutate("hello", &alphabet, 3);
            let len = mutated.chars().count() as isize;
            assert!((len - 5).abs() <= 3);
        }
    }

    #[test]
    fn test_single_char_mutate_grows_empty() {
        let mut rng = CandidateRng::new(7);
        let mutated = rng.single_char_mutate("", &printable_alphabet(), 1);
        assert_eq!(mutated.chars().count(), 1);
    }

    #[test]
    fn test_multi_mutate_uses_alphabet() {
        let mut rng = CandidateRng::new(42);
        let alphabet = vec!['x'];
        for _ in 0..100 {
            let mutated = rng.multi_mutate("aaaa", &alphabet);
            assert!(mutated.chars().all(|c| c == 'a' || c == 'x'));
            assert!(!mutated.is_empty());
        }
    }

    #[test]
    fn test_crossover_preserves_material() {
        let mut rng = CandidateRng::new(42);
        for _ in 0..100 {
            let (c1, c2) = rng.crossover("aaaa", "bbbbbb");
            assert_eq!(c1.len() + c2.len(), 10);
            assert_eq!(c1.matches('a').count() + c2.matches('a').count(), 4);
        }
    }

    #[test]
    fn test_crossover_handles_multibyte() {
        let mut rng = CandidateRng::new(1);
        let (c1, c2) = rng.crossover("ééé", "üü");
        assert_eq!(c1.chars().count() + c2.chars().count(), 5);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let alphabet = printable_alphabet();
        let mut a = CandidateRng::new(99);
        let mut b = CandidateRng::new(99);
        for _ in 0..50 {
            assert_eq!(
                a.multi_mutate("abcabc", &alphabet),
                b.multi_mutate("abcabc", &alphabet)
            );
            assert_eq!(a.crossover("abc", "xyz"), b.crossover("abc", "xyz"));
        }
    }
}
