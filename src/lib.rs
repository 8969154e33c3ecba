//! TDIFF - structural diff and patch generation for structured data.
//!
//! This library compares two decoded document trees (JSON, YAML, TOML) and
//! produces a path-addressed list of additions, removals, and replacements,
//! plus a rendered patch in one of four formats.
//!
//! # Example
//!
//! ```
//! use tdiff::{parse_json, Differ, DiffOptions, PatchFormat};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let left = parse_json(r#"{"key": "old"}"#)?;
//! let right = parse_json(r#"{"key": "new"}"#)?;
//!
//! let differ = Differ::new(DiffOptions {
//!     format: PatchFormat::Unified,
//!     ..Default::default()
//! });
//! let result = differ.compare(&left, &right, "old.json", "new.json")?;
//!
//! assert!(result.has_changes);
//! println!("{}", result.patch);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod engine;
pub mod error;
pub mod format;
pub mod loader;
pub mod normalize;
pub mod summary;
pub mod value;

// Re-export commonly used types for convenience
pub use diff::{diff_values, Change, ChangeOp};
pub use engine::{DiffOptions, DiffResult, Differ};
pub use error::{DiffError, FormatError, ParseError};
pub use format::{render_patch, PatchFormat};
pub use loader::{load_file, parse_json, parse_toml, parse_yaml};
pub use normalize::{normalize, NormalizeOptions, METADATA_IGNORE_PATHS};
pub use summary::{summarize, DiffSummary, ImpactLevel};
pub use value::Value;
