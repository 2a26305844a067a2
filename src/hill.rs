//! Building a [SkiHill] from segment descriptors.

use crate::model::{SkiHill, build_level_order};
use crate::parser::{ParsingError, SegmentParser, UnrecognizedTokenPolicy};
use tracing::debug;

// =#========================================================================#=
// HILL BUILDER
// =#========================================================================#=
/// Builder for configuring how descriptors are turned into a [SkiHill].
///
/// # Configuration Options
///
/// * **Unrecognized tokens**: non-empty tokens that are neither jump nor slalom
///   - [UnrecognizedTokenPolicy::AsPlain] - treat as plain segment (default)
///   - [UnrecognizedTokenPolicy::Reject] - fail the build
///
/// # Example
/// ```
/// use skihill::HillBuilder;
/// use skihill::parser::{ParsingErrorType, UnrecognizedTokenPolicy};
///
/// let descriptors = [Some(""), Some("mogul"), None];
///
/// let hill = HillBuilder::new().build(descriptors)?;
/// assert_eq!(hill.num_nodes(), 2);
///
/// let err = HillBuilder::new()
///     .with_unrecognized_policy(UnrecognizedTokenPolicy::Reject)
///     .build(descriptors)
///     .unwrap_err();
/// assert_eq!(err.kind(), &ParsingErrorType::UnrecognizedToken);
/// assert_eq!(err.position(), 1);
/// # Ok::<(), skihill::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HillBuilder {
    parser: SegmentParser,
}

impl HillBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how unrecognized tokens are handled.
    pub fn with_unrecognized_policy(mut self, policy: UnrecognizedTokenPolicy) -> Self {
        self.parser = self.parser.with_unrecognized_policy(policy);
        self
    }

    /// Classifies all descriptors and builds the hill in level order.
    ///
    /// Classification is eager: a malformed descriptor anywhere in the input
    /// rejects the whole hill before any node is created.
    ///
    /// # Arguments
    /// * `descriptors` - Level-order encoding, `None` marking absent nodes
    ///
    /// # Errors
    /// Returns the [ParsingError] of the first malformed descriptor.
    pub fn build<I, S>(&self, descriptors: I) -> Result<SkiHill, ParsingError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let segments = self.parser.classify_all(descriptors)?;
        let num_descriptors = segments.len();

        let hill = build_level_order(segments);
        debug!(
            num_descriptors,
            num_nodes = hill.num_nodes(),
            num_unplaced = hill.num_unplaced(),
            "built ski hill"
        );

        Ok(hill)
    }
}
