//! Rich diagnostic error types for the sesh-medu pipeline.
//!
//! Each stage defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text. Note that most stage
//! failures are non-fatal by design: the pipeline logs them and moves on
//! (an unreadable source, a failed image, a failed sink). Only
//! configuration problems abort a run.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the pipeline.
///
/// Each variant wraps a stage-specific error, preserving the full
/// diagnostic chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum SeshError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Archive(#[from] ArchiveError),
}

/// Convenience alias for pipeline results.
pub type SeshResult<T> = std::result::Result<T, SeshError>;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read configuration file: {path}")]
    #[diagnostic(
        code(sesh::config::read),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file {path}: {message}")]
    #[diagnostic(
        code(sesh::config::parse),
        help("The file must be valid TOML. Check the syntax near the reported location.")
    )]
    Parse { path: String, message: String },

    #[error("input directory not found: {path}")]
    #[diagnostic(
        code(sesh::config::input_dir),
        help(
            "The input directory must exist and contain the .txt catalog files. \
             Pass a different directory with --input or set `input_dir` in the \
             configuration file."
        )
    )]
    InputDir { path: String },

    #[error("failed to prepare output directory: {path}")]
    #[diagnostic(
        code(sesh::config::output_dir),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(sesh::config::invalid), help("Check the reported field."))]
    Invalid { message: String },
}

// ---------------------------------------------------------------------------
// Line source errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("failed to scan input directory: {path}")]
    #[diagnostic(
        code(sesh::source::scan),
        help("Check that the directory exists and is readable.")
    )]
    Scan {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source: {path}")]
    #[diagnostic(
        code(sesh::source::read),
        help(
            "The source file could not be read. It is skipped; the remaining \
             sources are still processed."
        )
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("source is not valid UTF-8: {path}")]
    #[diagnostic(
        code(sesh::source::decode),
        help(
            "Catalog sources must be UTF-8 text. Re-encode the file; it is \
             skipped in the meantime."
        )
    )]
    Decode { path: String },
}

// ---------------------------------------------------------------------------
// Glyph image errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("failed to write glyph image: {path}")]
    #[diagnostic(
        code(sesh::render::write),
        help("Check disk space and permissions on the image output directory.")
    )]
    Write {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load font: {path}")]
    #[diagnostic(
        code(sesh::render::font),
        help(
            "The font file could not be parsed. The renderer falls back to the \
             next font in the list, or to a plain placeholder box."
        )
    )]
    Font { path: String },
}

// ---------------------------------------------------------------------------
// Export sink errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("I/O error writing {path}")]
    #[diagnostic(
        code(sesh::export::io),
        help("Check disk space and permissions on the output directory.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {message}")]
    #[diagnostic(
        code(sesh::export::json),
        help("Serialization of the record set failed; this file is skipped.")
    )]
    Json { path: String, message: String },

    #[error("CSV error for {path}: {message}")]
    #[diagnostic(
        code(sesh::export::csv),
        help("Writing the category table failed; this file is skipped.")
    )]
    Csv { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Archive errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ArchiveError {
    #[error("failed to create archive: {path}")]
    #[diagnostic(
        code(sesh::archive::create),
        help("Check disk space and permissions on the output directory.")
    )]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to add \"{entry}\" to archive: {message}")]
    #[diagnostic(
        code(sesh::archive::append),
        help("The archive is incomplete. Re-run once the underlying problem is fixed.")
    )]
    Append { entry: String, message: String },
}
