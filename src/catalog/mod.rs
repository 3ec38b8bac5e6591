//! Sign-catalog parsing and normalization.
//!
//! The one piece of real logic in the pipeline: converting unstructured
//! catalog lines into a deduplicated, categorized record set. Everything
//! around it (file reading, image rendering, serialization, archiving) is
//! a thin collaborator with no decision logic of its own.

pub mod gardiner;
pub mod parser;
pub mod record;

pub use parser::{CatalogParser, group_by_category};
pub use record::SignRecord;
