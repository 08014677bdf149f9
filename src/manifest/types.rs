use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_GENERATOR_APP, DEFAULT_ORIENTATION, DEFAULT_SPLASH_FADE_OUT_MS};

/// Build-time description of the wrapped web app.
///
/// Loaded once per build and never mutated. Equality and hashing cover every
/// field, including the order of `shortcuts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwaManifest {
    /// Reverse-domain package id, e.g. `app.example.twa`
    pub application_id: String,
    pub host_name: String,
    /// Path (and query) appended to the host on launch
    pub launch_url: String,
    pub name: String,
    pub launcher_name: String,
    /// Status bar color
    pub theme_color: String,
    pub navigation_color: String,
    pub navigation_color_dark: String,
    pub navigation_divider_color: String,
    pub navigation_divider_color_dark: String,
    /// Splash screen background
    pub background_color: String,
    /// Enables notification delegation to the browser
    #[serde(default)]
    pub enable_notifications: bool,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
    /// Fade out animation length in milliseconds when the splash screen is removed
    #[serde(default = "default_splash_fade_out")]
    pub splash_screen_fade_out_duration: u32,
    #[serde(default = "default_generator_app")]
    pub generator_app: String,
    #[serde(default)]
    pub fallback_type: FallbackType,
    #[serde(default = "default_true", deserialize_with = "bool_or_string")]
    pub enable_site_settings_shortcut: bool,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    /// Web manifest location, used by ChromeOS and Meta Quest to open the web version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_manifest_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_scope_url: Option<String>,
}

/// A launcher shortcut as written in the manifest.
///
/// Fields stay optional here so a missing one can be reported with the
/// shortcut's index instead of a generic parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub name: Option<String>,
    #[serde(alias = "short_name")]
    pub short_name: Option<String>,
    pub url: Option<String>,
    /// Drawable resource name
    pub icon: Option<String>,
}

impl Shortcut {
    pub fn new(name: &str, short_name: &str, url: &str, icon: &str) -> Self {
        Self {
            name: Some(name.into()),
            short_name: Some(short_name.into()),
            url: Some(url.into()),
            icon: Some(icon.into()),
        }
    }
}

/// A shortcut whose required fields have all been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutEntry<'a> {
    pub index: usize,
    pub name: &'a str,
    pub short_name: &'a str,
    pub url: &'a str,
    pub icon: &'a str,
}

/// What the shell opens when no browser supports Trusted Web Activities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackType {
    #[default]
    CustomTabs,
    WebView,
}

impl FallbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackType::CustomTabs => "customtabs",
            FallbackType::WebView => "webview",
        }
    }
}

impl TwaManifest {
    /// Full launch URL, `https://{hostName}{launchUrl}`
    pub fn full_launch_url(&self) -> String {
        format!("https://{}{}", self.host_name, self.launch_url)
    }

    pub fn provider_authority(&self) -> String {
        format!("{}.fileprovider", self.application_id)
    }
}

fn default_splash_fade_out() -> u32 {
    DEFAULT_SPLASH_FADE_OUT_MS
}

fn default_generator_app() -> String {
    DEFAULT_GENERATOR_APP.into()
}

fn default_orientation() -> String {
    DEFAULT_ORIENTATION.into()
}

fn default_true() -> bool {
    true
}

/// Older manifests store booleans as `"true"` / `"false"` strings.
fn bool_or_string<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected \"true\" or \"false\", got {other:?}"
            ))),
        },
    }
}
