//! # sesh-medu
//!
//! A pipeline for plain-text catalogs of hieroglyphic sign definitions:
//! parse category headers and code/description pairs into a deduplicated
//! record set, render a placeholder image per sign, and emit the results
//! as JSON, CSV, a zip archive, and a text summary.
//!
//! ## Architecture
//!
//! - **Catalog core** (`catalog`): the parse/normalize pass — category
//!   heuristic, pairing, code-point encoding, first-seen dedup — plus the
//!   display-only Gardiner sort key
//! - **Collaborators** (`source`, `render`, `export`, `archive`,
//!   `summary`): thin I/O wrappers around the core with no decision logic
//! - **Orchestration** (`pipeline`, `config`): one validated configuration
//!   per run, stages logged via `tracing`, sink failures isolated
//!
//! ## Library usage
//!
//! ```no_run
//! use sesh_medu::config::PipelineConfig;
//! use sesh_medu::pipeline;
//!
//! let config = PipelineConfig {
//!     input_dir: "medu_neTcher".into(),
//!     output_dir: "output".into(),
//!     ..Default::default()
//! };
//! let summary = pipeline::run(&config).unwrap();
//! println!("{}", summary.report());
//! ```

pub mod archive;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod render;
pub mod scroll;
pub mod source;
pub mod summary;
