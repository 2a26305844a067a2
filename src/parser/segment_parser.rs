//! Classification of descriptor tokens into [Segment]s.
//!
//! Token grammar:
//! - `""` → plain
//! - contains `jump` → jump, followed by `-<int>` (e.g. `jump-12`)
//! - contains `slalom` → slalom, followed by `-L` or `-W`
//! - anything else → see [UnrecognizedTokenPolicy]
//!
//! `jump` is checked before `slalom`.

use crate::model::segment::{Direction, Segment, SegmentId};
use crate::parser::parsing_error::ParsingError;

const JUMP_KEYWORD: &str = "jump";
const SLALOM_KEYWORD: &str = "slalom";
const SUFFIX_DELIMITER: char = '-';

// =#========================================================================#=
// UNRECOGNIZED TOKEN POLICY
// =#========================================================================#=
/// How to treat a non-empty token that is neither a jump nor a slalom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedTokenPolicy {
    /// Classify as a plain segment (default)
    #[default]
    AsPlain,
    /// Fail with [UnrecognizedToken](crate::parser::ParsingErrorType::UnrecognizedToken)
    Reject,
}

// =#========================================================================#=
// SEGMENT PARSER
// =#========================================================================#=
/// Turns descriptor tokens into [Segment]s.
///
/// # Example
/// ```
/// use skihill::parser::SegmentParser;
/// use skihill::model::Segment;
///
/// let parser = SegmentParser::new();
/// assert_eq!(parser.classify("jump-12", 3)?, Segment::jump(3, 12));
/// assert!(parser.classify("jump", 4).is_err());
/// # Ok::<(), skihill::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentParser {
    unrecognized: UnrecognizedTokenPolicy,
}

impl SegmentParser {
    /// Creates a parser with the default [UnrecognizedTokenPolicy::AsPlain].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how unrecognized tokens are handled.
    pub fn with_unrecognized_policy(mut self, policy: UnrecognizedTokenPolicy) -> Self {
        self.unrecognized = policy;
        self
    }

    /// Returns the configured policy for unrecognized tokens.
    pub fn unrecognized_policy(&self) -> UnrecognizedTokenPolicy {
        self.unrecognized
    }

    /// Classifies a single (present) token found at `position`.
    ///
    /// # Errors
    /// Returns a [ParsingError] naming the token and position if a jump or
    /// slalom token has a malformed suffix, or if the token is unrecognized
    /// and the policy is [UnrecognizedTokenPolicy::Reject].
    pub fn classify(&self, token: &str, position: SegmentId) -> Result<Segment, ParsingError> {
        if token.is_empty() {
            return Ok(Segment::plain(position));
        }

        if let Some(rest) = after_keyword(token, JUMP_KEYWORD) {
            let height = rest
                .strip_prefix(SUFFIX_DELIMITER)
                .and_then(|digits| digits.parse::<i64>().ok())
                .ok_or_else(|| ParsingError::malformed_jump_height(token, position))?;
            return Ok(Segment::jump(position, height));
        }

        if let Some(rest) = after_keyword(token, SLALOM_KEYWORD) {
            let direction = rest
                .strip_prefix(SUFFIX_DELIMITER)
                .and_then(Direction::from_code)
                .ok_or_else(|| ParsingError::malformed_slalom_direction(token, position))?;
            return Ok(Segment::slalom(position, direction));
        }

        match self.unrecognized {
            UnrecognizedTokenPolicy::AsPlain => Ok(Segment::plain(position)),
            UnrecognizedTokenPolicy::Reject => Err(ParsingError::unrecognized_token(token, position)),
        }
    }

    /// Classifies every present descriptor, keeping gaps as `None`.
    ///
    /// Fails on the first malformed descriptor, so nothing downstream ever
    /// sees a partially classified hill.
    pub fn classify_all<I, S>(&self, descriptors: I) -> Result<Vec<Option<Segment>>, ParsingError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        descriptors
            .into_iter()
            .enumerate()
            .map(|(position, descriptor)| {
                descriptor
                    .map(|token| self.classify(token.as_ref(), position))
                    .transpose()
            })
            .collect()
    }
}

/// Returns the remainder of `token` after the first occurrence of `keyword`.
fn after_keyword<'a>(token: &'a str, keyword: &str) -> Option<&'a str> {
    token.find(keyword).map(|start| &token[start + keyword.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_keyword_takes_first_occurrence() {
        assert_eq!(after_keyword("jump-3", "jump"), Some("-3"));
        assert_eq!(after_keyword("xjump-jump-3", "jump"), Some("-jump-3"));
        assert_eq!(after_keyword("slalom-L", "jump"), None);
    }

    #[test]
    fn classify_all_keeps_gaps_and_positions() {
        let parser = SegmentParser::new();
        let segments = parser
            .classify_all([Some(""), None, Some("jump-2")])
            .unwrap();
        assert_eq!(segments, vec![Some(Segment::plain(0)), None, Some(Segment::jump(2, 2))]);
    }
}
