pub mod cli;
pub mod constants;
pub mod emitter;
pub mod logging;
pub mod manifest;
pub mod resources;
pub mod shortcuts;
mod error;
mod util;

pub use emitter::{emit, EmitReport, OutputLayout};
pub use error::{Error, Result};
pub use manifest::{load_manifest, Shortcut, TwaManifest};
