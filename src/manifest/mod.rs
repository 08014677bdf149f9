//! The TWA manifest record: types, loading and validation.

pub mod load;
pub mod types;
pub mod validate;

pub use load::{load_manifest, parse_manifest, ManifestFormat};
pub use types::{FallbackType, Shortcut, ShortcutEntry, TwaManifest};
pub use validate::{check_shortcuts, collect_issues, validate, validate_fields};
