//! Generator constants
//!
//! Fixed names, defaults and output locations shared by the manifest loader,
//! the resource emitter and the CLI.

/// Maximum number of launcher shortcuts Android shows for an app
pub const MAX_SHORTCUTS: usize = 4;

/// Default manifest file looked up in the working directory
pub const DEFAULT_MANIFEST_FILE: &str = "twa-manifest.json";

/// Shortcuts file, relative to the Android project directory
pub const SHORTCUTS_FILE: &str = "src/main/res/xml/shortcuts.xml";

/// Generated values resource file, relative to the Android project directory
pub const VALUES_FILE: &str = "src/main/res/values/twa_manifest.xml";

pub const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

pub const DEFAULT_SPLASH_FADE_OUT_MS: u32 = 300;
pub const DEFAULT_GENERATOR_APP: &str = "bubblewrap-cli";
pub const DEFAULT_ORIENTATION: &str = "portrait";

/// Activity that receives launcher intents in the shell app
pub const LAUNCHER_ACTIVITY: &str = "LauncherActivity";

pub const ENV_MANIFEST: &str = "TWA_MANIFEST";
pub const ENV_LOG_LEVEL: &str = "TWA_LOG_LEVEL";
pub const ENV_LOG_DISABLE: &str = "TWA_LOG_DISABLE";
