//! ReDoS Hunter - Evolutionary search for catastrophic-backtracking inputs.
//!
//! Given a regular expression and its risk-classified token stream, this
//! crate decides whether an input exists that drives a backtracking matcher
//! into super-linear time and, if so, produces a concrete exploit string.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Configuration, pattern/token input, seeds and wire format
//! - `compute`: Bounded matcher, timing harness and the evolutionary search
//! - `analysis`: The end-to-end entry point (screen, evolve, amplify, report)
//!
//! # Example
//!
//! ```rust,no_run
//! use redos_hunter::{
//!     analysis::evaluate_expression,
//!     schema::{Pattern, SearchConfig, Token, TokenType},
//! };
//!
//! let pattern = Pattern::new(
//!     "(a+)+$",
//!     vec![
//!         Token::new(TokenType::Literal, "a"),
//!         Token::new(TokenType::Quantifier, "+"),
//!         Token::new(TokenType::QuantifierModifier, "+"),
//!     ],
//! );
//!
//! let analysis = evaluate_expression(&pattern, &SearchConfig::default())
//!     .expect("valid pattern");
//!
//! println!("{} (score {})", analysis.output.status, analysis.output.score);
//! for annotation in &analysis.output.annotations {
//!     println!("  {:?}", annotation.entity);
//! }
//! ```

pub mod analysis;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use analysis::{
    Analysis, AnalysisError, RunMode, evaluate_expression, evaluate_expression_with_progress,
};
pub use compute::{BacktrackTimer, EvolutionEngine, MatchTimer};
pub use schema::{Pattern, SearchConfig, Token, TokenType};
