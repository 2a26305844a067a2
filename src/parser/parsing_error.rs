//! Error types for segment descriptor parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting descriptor tokens that cannot be turned into a
//! [Segment](crate::model::Segment).

use thiserror::Error;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while classifying segment descriptors.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum ParsingErrorType {
    /// A `jump` token without a well-formed `-<int>` suffix.
    #[error("Malformed jump height, expected `jump-<int>`")]
    MalformedJumpHeight,
    /// A `slalom` token without a `-L` or `-W` suffix.
    #[error("Malformed slalom direction, expected `slalom-L` or `slalom-W`")]
    MalformedSlalomDirection,
    /// A non-empty token of unknown kind (only under strict policy).
    #[error("Unrecognized segment token")]
    UnrecognizedToken,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and offending token).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}\n  Token: {token:?}")]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    token: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type, the token and its position
    pub fn new(kind: ParsingErrorType, token: &str, position: usize) -> Self {
        Self {
            kind,
            position,
            token: token.to_string(),
        }
    }

    /// Convenience constructor for MalformedJumpHeight
    pub fn malformed_jump_height(token: &str, position: usize) -> Self {
        Self::new(ParsingErrorType::MalformedJumpHeight, token, position)
    }

    /// Convenience constructor for MalformedSlalomDirection
    pub fn malformed_slalom_direction(token: &str, position: usize) -> Self {
        Self::new(ParsingErrorType::MalformedSlalomDirection, token, position)
    }

    /// Convenience constructor for UnrecognizedToken
    pub fn unrecognized_token(token: &str, position: usize) -> Self {
        Self::new(ParsingErrorType::UnrecognizedToken, token, position)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position (index in the descriptor array) where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the offending token
    pub fn token(&self) -> &str {
        &self.token
    }
}
