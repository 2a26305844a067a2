//! Parsing of segment descriptor tokens.

pub mod parsing_error;
pub mod segment_parser;

pub use parsing_error::ParsingError;
pub use parsing_error::ParsingErrorType;
pub use segment_parser::SegmentParser;
pub use segment_parser::UnrecognizedTokenPolicy;
