//! Protobuf payloads exchanged with the caller, plus base64 transport.
//!
//! Messages are declared by hand with `prost` derives so no build step is
//! needed.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use prost::Message;

use super::pattern;

/// Outer envelope around an expression.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Root {
    #[prost(message, optional, tag = "1")]
    pub expression: ::core::option::Option<Expression>,
}

/// A parsed expression: raw text plus classified tokens.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Expression {
    #[prost(string, tag = "1")]
    pub raw: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub tokens: ::prost::alloc::vec::Vec<Token>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Token {
    #[prost(enumeration = "TokenType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenType {
    Unknown = 0,
    Literal = 1,
    CharacterClass = 2,
    Anchor = 3,
    GroupOpen = 4,
    GroupClose = 5,
    Alternation = 6,
    Quantifier = 7,
    QuantifierModifier = 8,
    GroupReference = 9,
    Lookaround = 10,
    Escape = 11,
}

/// Analysis result returned to the caller.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Output {
    #[prost(string, tag = "1")]
    pub status: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub score: i32,
    #[prost(message, repeated, tag = "3")]
    pub annotations: ::prost::alloc::vec::Vec<Annotation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Annotation {
    #[prost(string, tag = "1")]
    pub entity: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub note: ::prost::alloc::string::String,
}

/// Malformed input payloads.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("Payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Payload is not a valid protobuf message: {0}")]
    Protobuf(#[from] prost::DecodeError),
    #[error("Envelope carries no expression")]
    MissingExpression,
    #[error("Token {index} has unknown type {value}")]
    UnknownTokenType { index: usize, value: i32 },
}

/// Decode a base64 `Root` envelope and unwrap its expression.
pub fn decode_root(encoded: &str) -> Result<Expression, WireError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let root = Root::decode(bytes.as_slice())?;
    root.expression.ok_or(WireError::MissingExpression)
}

/// Decode a bare base64 `Expression`.
pub fn decode_expression(encoded: &str) -> Result<Expression, WireError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(Expression::decode(bytes.as_slice())?)
}

/// Serialize an output and base64-encode it.
pub fn encode_output(output: &Output) -> String {
    STANDARD.encode(output.encode_to_vec())
}

impl From<TokenType> for pattern::TokenType {
    fn from(value: TokenType) -> Self {
        match value {
            TokenType::Unknown => pattern::TokenType::Unknown,
            TokenType::Literal => pattern::TokenType::Literal,
            TokenType::CharacterClass => pattern::TokenType::CharacterClass,
            TokenType::Anchor => pattern::TokenType::Anchor,
            TokenType::GroupOpen => pattern::TokenType::GroupOpen,
            TokenType::GroupClose => pattern::TokenType::GroupClose,
            TokenType::Alternation => pattern::TokenType::Alternation,
            TokenType::Quantifier => pattern::TokenType::Quantifier,
            TokenType::QuantifierModifier => pattern::TokenType::QuantifierModifier,
            TokenType::GroupReference => pattern::TokenType::GroupReference,
            TokenType::Lookaround => pattern::TokenType::Lookaround,
            TokenType::Escape => pattern::TokenType::Escape,
        }
    }
}

impl From<pattern::TokenType> for TokenType {
    fn from(value: pattern::TokenType) -> Self {
        match value {
            pattern::TokenType::Unknown => TokenType::Unknown,
            pattern::TokenType::Literal => TokenType::Literal,
            pattern::TokenType::CharacterClass => TokenType::CharacterClass,
            pattern::TokenType::Anchor => TokenType::Anchor,
            pattern::TokenType::GroupOpen => TokenType::GroupOpen,
            pattern::TokenType::GroupClose => TokenType::GroupClose,
            pattern::TokenType::Alternation => TokenType::Alternation,
            pattern::TokenType::Quantifier => TokenType::Quantifier,
            pattern::TokenType::QuantifierModifier => TokenType::QuantifierModifier,
            pattern::TokenType::GroupReference => TokenType::GroupReference,
            pattern::TokenType::Lookaround => TokenType::Lookaround,
            pattern::TokenType::Escape => TokenType::Escape,
        }
    }
}

impl TryFrom<Expression> for pattern::Pattern {
    type Error = WireError;

    fn try_from(expression: Expression) -> Result<Self, Self::Error> {
        let tokens = expression
            .tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                let token_type = TokenType::try_from(token.r#type).map_err(|_| {
                    WireError::UnknownTokenType {
                        index,
                        value: token.r#type,
                    }
                })?;
                Ok(pattern::Token::new(token_type.into(), token.value))
            })
            .collect::<Result<Vec<_>, WireError>>()?;

        Ok(pattern::Pattern::new(expression.raw, tokens))
    }
}

impl From<&pattern::Pattern> for Expression {
    fn from(pattern: &pattern::Pattern) -> Self {
        Expression {
            raw: pattern.raw.clone(),
            tokens: pattern
                .tokens
                .iter()
                .map(|t| Token {
                    r#type: TokenType::from(t.token_type) as i32,
                    value: t.value.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expression() -> Expression {
        Expression {
            raw: "(a+)+$".into(),
            tokens: vec![
                Token {
                    r#type: TokenType::Literal as i32,
                    value: "a".into(),
                },
                Token {
                    r#type: TokenType::QuantifierModifier as i32,
                    value: "+".into(),
                },
            ],
        }
    }

    #[test]
    fn test_decode_root() {
        let root = Root {
            expression: Some(sample_expression()),
        };
        let encoded = STANDARD.encode(root.encode_to_vec());

        let expression = decode_root(&encoded).unwrap();
        assert_eq!(expression, sample_expression());
    }

    #[test]
    fn test_decode_root_tolerates_trailing_newline() {
        let root = Root {
            expression: Some(sample_expression()),
        };
        let encoded = format!("{}\n", STANDARD.encode(root.encode_to_vec()));
        assert!(decode_root(&encoded).is_ok());
    }

    #[test]
    fn test_empty_envelope_is_malformed() {
        let encoded = STANDARD.encode(Root::default().encode_to_vec());
        assert!(matches!(
            decode_root(&encoded),
            Err(WireError::MissingExpression)
        ));
    }

    #[test]
    fn test_bad_base64_is_malformed() {
        assert!(matches!(
            decode_expression("not base64!"),
            Err(WireError::Base64(_))
        ));
    }

    #[test]
    fn test_bad_protobuf_is_malformed() {
        // Field 1, length-delimited, length 10, but only 1 byte follows
        let encoded = STANDARD.encode([0x0a, 0x0a, 0x41]);
        assert!(matches!(
            decode_expression(&encoded),
            Err(WireError::Protobuf(_))
        ));
    }

    #[test]
    fn test_expression_to_pattern() {
        let pattern = pattern::Pattern::try_from(sample_expression()).unwrap();
        assert_eq!(pattern.raw, "(a+)+$");
        assert_eq!(
            pattern.tokens[1].token_type,
            pattern::TokenType::QuantifierModifier
        );

        let back = Expression::from(&pattern);
        assert_eq!(back, sample_expression());
    }

    #[test]
    fn test_unknown_token_type() {
        let mut expression = sample_expression();
        expression.tokens[1].r#type = 99;

        let err = pattern::Pattern::try_from(expression).unwrap_err();
        assert!(matches!(
            err,
            WireError::UnknownTokenType {
                index: 1,
                value: 99
            }
        ));
    }

    #[test]
    fn test_encode_output() {
        let output = Output {
            status: "Vulnerability found".into(),
            score: 1,
            annotations: vec![Annotation {
                entity: "aaaa!".into(),
                note: "slow".into(),
            }],
        };
        let encoded = encode_output(&output);
        let bytes = STANDARD.decode(encoded).unwrap();
        assert_eq!(Output::decode(bytes.as_slice()).unwrap(), output);
    }
}
