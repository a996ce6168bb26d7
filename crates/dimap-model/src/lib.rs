//! Data model for header mapping: the headers on both sides, the
//! automapper configuration, and the resulting mapping proposal.
//!
//! All types are transient value objects created fresh per invocation;
//! nothing here performs I/O or holds state between calls.

pub mod config;
pub mod headers;
pub mod proposal;

pub use config::{DEFAULT_MATCH_LIMIT, DEFAULT_SIMILARITY_THRESHOLD, MatchConfig};
pub use headers::{SourceHeader, TargetHeader, visible};
pub use proposal::MappingProposal;
