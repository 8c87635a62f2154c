//! Exploit amplification ("pumping").
//!
//! Turns a slow candidate into a length-bounded exploit by locating the
//! substring whose repetition slows matching the most and repeating it as
//! many times as fits:
//!
//! ```text
//! "xxbadxx" -> "xxbadbadbadbadxx"
//! ```

use rayon::prelude::*;

use super::fitness::MatchTimer;

/// Amplify `candidate` into an exploit no longer than `max_len` characters.
///
/// Three phases:
/// 1. Drop each internal character in turn and keep the slowest reduction.
/// 2. Over the reduction, find the window `[i, j)` whose in-place
///    duplication is slowest.
/// 3. Repeat that window `k = (max_len - len) / (j - i)` times between the
///    prefix and suffix. When `k <= 1` the window is dropped.
///
/// Ties in phases 1 and 2 go to the later variant.
pub fn pump<T: MatchTimer + ?Sized>(timer: &T, candidate: &str, max_len: usize) -> String {
    let reduced = slowest_reduction(timer, candidate);
    let Some((i, j)) = slowest_window(timer, &reduced) else {
        return reduced.into_iter().collect();
    };

    let k = max_len.saturating_sub(reduced.len()) / (j - i);

    let mut pumped: String = reduced[..i].iter().collect();
    if k > 1 {
        let window: String = reduced[i..j].iter().collect();
        pumped.push_str(&window.repeat(k));
    }
    pumped.extend(&reduced[j..]);
    pumped
}

/// Phase 1: slowest single-character deletion of an internal position.
///
/// Returns the candidate unchanged when it has no internal positions.
fn slowest_reduction<T: MatchTimer + ?Sized>(timer: &T, candidate: &str) -> Vec<char> {
    let chars: Vec<char> = candidate.chars().collect();
    if chars.len() < 3 {
        return chars;
    }

    let variants: Vec<Vec<char>> = (1..chars.len() - 1)
        .map(|i| {
            let mut variant = chars.clone();
            variant.remove(i);
            variant
        })
        .collect();

    let times: Vec<f64> = variants
        .par_iter()
        .map(|v| timer.match_time(&v.iter().collect::<String>()))
        .collect();

    let mut slowest = 0;
    let mut slowest_time = 0.0;
    for (idx, &time) in times.iter().enumerate() {
        if time >= slowest_time {
            slowest_time = time;
            slowest = idx;
        }
    }

    variants.into_iter().nth(slowest).unwrap_or(chars)
}

/// Phase 2: the window whose in-place duplication is slowest.
fn slowest_window<T: MatchTimer + ?Sized>(timer: &T, chars: &[char]) -> Option<(usize, usize)> {
    let n = chars.len();
    let windows: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..=n).map(move |j| (i, j)))
        .collect();

    let times: Vec<f64> = windows
        .par_iter()
        .map(|&(i, j)| timer.match_time(&duplicate_window(chars, i, j)))
        .collect();

    let mut best = None;
    let mut best_time = 0.0;
    for (&window, &time) in windows.iter().zip(&times) {
        if time >= best_time {
            best_time = time;
            best = Some(window);
        }
    }
    best
}

/// `chars` with `chars[i..j]` repeated twice in place.
fn duplicate_window(chars: &[char], i: usize, j: usize) -> String {
    chars[..i]
        .iter()
        .chain(&chars[i..j])
        .chain(&chars[i..j])
        .chain(&chars[j..])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Time grows with the longest run of 'a', capped at 100.
    struct RunTimer;

    impl MatchTimer for RunTimer {
        fn ceiling(&self) -> f64 {
            100.0
        }

        fn match_time(&self, candidate: &str) -> f64 {
            let mut longest = 0;
            let mut current = 0;
            for c in candidate.chars() {
                if c == 'a' {
                    current += 1;
                    longest = longest.max(current);
                } else {
                    current = 0;
                }
            }
            (longest as f64).min(self.ceiling())
        }
    }

    /// Every input takes the same time.
    struct FlatTimer;

    impl MatchTimer for FlatTimer {
        fn ceiling(&self) -> f64 {
            1.0
        }

        fn match_time(&self, _candidate: &str) -> f64 {
            0.5
        }
    }

    #[test]
    fn test_duplicate_window() {
        let chars: Vec<char> = "xbadx".chars().collect();
        assert_eq!(duplicate_window(&chars, 1, 4), "xbadbadx");
        assert_eq!(duplicate_window(&chars, 0, 5), "xbadxxbadx");
        assert_eq!(duplicate_window(&chars, 4, 5), "xbadxx");
    }

    #[test]
    fn test_reduction_keeps_later_tie() {
        // every deletion of "xyzw" is equally fast: the last one wins
        let reduced = slowest_reduction(&FlatTimer, "xyzw");
        assert_eq!(reduced.iter().collect::<String>(), "xyw");
    }

    #[test]
    fn test_reduction_never_drops_first_or_last() {
        let reduced: String = slowest_reduction(&RunTimer, "!aaaa#").into_iter().collect();
        assert!(reduced.starts_with('!'));
        assert!(reduced.ends_with('#'));
        assert_eq!(reduced.chars().count(), 5);
    }

    #[test]
    fn test_reduction_of_short_candidate() {
        assert_eq!(slowest_reduction(&RunTimer, "ab"), vec!['a', 'b']);
        assert!(slowest_reduction(&RunTimer, "").is_empty());
    }

    #[test]
    fn test_pump_repeats_slow_window() {
        let pumped = pump(&RunTimer, "!aaaa#", 30);
        assert!(pumped.starts_with('!'));
        assert!(pumped.ends_with('#'));
        assert!(pumped.chars().count() <= 30);
        assert!(RunTimer.match_time(&pumped) > RunTimer.match_time("!aaaa#"));
    }

    #[test]
    fn test_pump_drops_window_when_repeat_count_small() {
        // reduction is "!aaa#", the best window is "aaa" and
        // k = (6 - 5) / 3 = 0, so only prefix and suffix remain
        let pumped = pump(&RunTimer, "!aaaa#", 6);
        assert_eq!(pumped, "!#");
    }

    #[test]
    fn test_pump_empty_candidate() {
        assert_eq!(pump(&RunTimer, "", 10), "");
    }

    proptest! {
        #[test]
        fn prop_pump_respects_max_len(candidate in "[a!b]{0,12}", extra in 0usize..40) {
            let max_len = candidate.chars().count() + extra;
            let pumped = pump(&RunTimer, &candidate, max_len);
            prop_assert!(pumped.chars().count() <= max_len);
        }
    }
}
