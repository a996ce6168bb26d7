//! Fuzzy header matching: a registry of string-similarity algorithms and
//! the automapper that uses them to propose source-to-target header
//! pairings.
//!
//! The computation is pure and in-memory: no I/O, no shared state, and
//! every invocation is independent, so concurrent calls need no
//! coordination.
//!
//! ```
//! use dimap_match::automap;
//! use dimap_model::{MatchConfig, SourceHeader, TargetHeader};
//!
//! let targets = vec![TargetHeader::new("first_name")];
//! let sources = vec![SourceHeader::new("firstname")];
//! let config = MatchConfig::new("levenshteinDistance");
//!
//! let proposal = automap(&targets, &sources, &config)?;
//! assert_eq!(
//!     proposal.matches_for("first_name"),
//!     Some(&["firstname".to_string()][..])
//! );
//! # Ok::<(), dimap_match::AutomapError>(())
//! ```

#![deny(unsafe_code)]

pub mod algorithms;
pub mod automap;
pub mod error;

pub use algorithms::{Algorithm, AlgorithmResult};
pub use automap::automap;
pub use error::{AutomapError, Result};
