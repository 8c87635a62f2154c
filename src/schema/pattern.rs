//! Pattern and token types describing the expression under analysis.

use serde::{Deserialize, Serialize};

/// Classification of a single token in a parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Unknown,
    Literal,
    CharacterClass,
    Anchor,
    GroupOpen,
    GroupClose,
    Alternation,
    Quantifier,
    /// Quantifier applied to a quantified or grouped sub-expression.
    QuantifierModifier,
    /// Backreference to a capture group.
    GroupReference,
    /// Lookahead or lookbehind assertion.
    Lookaround,
    Escape,
}

impl TokenType {
    /// Whether this token class is a structural source of super-linear
    /// backtracking.
    #[inline]
    pub fn is_risk_bearing(self) -> bool {
        matches!(
            self,
            TokenType::QuantifierModifier | TokenType::GroupReference | TokenType::Lookaround
        )
    }

    /// Whether the token value contributes literal characters to an input.
    #[inline]
    pub fn carries_text(self) -> bool {
        matches!(self, TokenType::Literal | TokenType::Escape)
    }
}

/// A single classified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
        }
    }
}

/// Raw expression text plus its ordered, risk-classified token stream.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Raw expression text.
    pub raw: String,
    /// Ordered token stream.
    pub tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(raw: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            raw: raw.into(),
            tokens,
        }
    }

    /// The token stream, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
