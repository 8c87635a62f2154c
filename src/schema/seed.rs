//! Initial population construction from a token stream.

use std::collections::HashSet;

use super::{Token, TokenType};

/// Repetition lengths used for single-character seeds.
const SEED_LENGTHS: [usize; 4] = [1, 2, 4, 8];

/// Characters tried, in order, as a mismatching suffix.
const MISMATCH_CANDIDATES: [char; 5] = ['!', '#', '~', '_', '0'];

/// Fallback hint when the token stream carries no literal text.
const FALLBACK_HINT: char = 'a';

/// Build the initial candidate population for a token stream.
///
/// Seeds are the concatenated literal text plus, for every hint character,
/// short runs of that character with and without a trailing mismatch.
/// Order is deterministic and duplicates are removed.
pub fn generate_seeds(tokens: &[Token]) -> Vec<String> {
    let hints = hint_chars(tokens);
    let mismatch = MISMATCH_CANDIDATES
        .iter()
        .copied()
        .find(|c| !hints.contains(c));

    let mut seeds = Vec::new();

    let literal: String = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Literal)
        .map(|t| t.value.as_str())
        .collect();
    if !literal.is_empty() {
        seeds.push(literal);
    }

    for &c in &hints {
        for n in SEED_LENGTHS {
            let run = c.to_string().repeat(n);
            if let Some(m) = mismatch {
                let mut failing = run.clone();
                failing.push(m);
                seeds.push(run);
                seeds.push(failing);
            } else {
                seeds.push(run);
            }
        }
    }

    let mut seen = HashSet::new();
    seeds.retain(|s| seen.insert(s.clone()));
    seeds
}

/// Characters carried by literal-bearing tokens, in first-seen order.
fn hint_chars(tokens: &[Token]) -> Vec<char> {
    let mut hints = Vec::new();
    for token in tokens.iter().filter(|t| t.token_type.carries_text()) {
        let text = match token.token_type {
            // `\d`, `\.` and friends: the escaped character is the hint
            TokenType::Escape => token.value.trim_start_matches('\\'),
            _ => token.value.as_str(),
        };
        for c in text.chars() {
            if !c.is_control() && !hints.contains(&c) {
                hints.push(c);
            }
        }
    }

    if hints.is_empty() {
        hints.push(FALLBACK_HINT);
    }
    hints
}
