//! Vulnerability screen over the token stream.

use crate::schema::Token;

/// Whether the token stream contains any risk-bearing construct
/// (quantifier modifier, group reference or lookaround).
///
/// Without one, catastrophic backtracking is structurally impossible and the
/// search can be skipped.
pub fn vulnerable_tokens_present(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.token_type.is_risk_bearing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokenType;

    #[test]
    fn test_plain_class_is_safe() {
        let tokens = vec![
            Token::new(TokenType::Anchor, "^"),
            Token::new(TokenType::CharacterClass, "[a-z]"),
            Token::new(TokenType::Quantifier, "+"),
            Token::new(TokenType::Anchor, "$"),
        ];
        assert!(!vulnerable_tokens_present(&tokens));
    }

    #[test]
    fn test_each_risk_class_triggers() {
        for risky in [
            TokenType::QuantifierModifier,
            TokenType::GroupReference,
            TokenType::Lookaround,
        ] {
            let tokens = vec![
                Token::new(TokenType::Literal, "a"),
                Token::new(risky, "x"),
            ];
            assert!(vulnerable_tokens_present(&tokens), "{risky:?}");
        }
    }

    #[test]
    fn test_empty_stream() {
        assert!(!vulnerable_tokens_present(&[]));
    }
}
