use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::types::TwaManifest;

/// Manifest file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Read a manifest from disk. Defaults are applied here; nothing is validated.
pub fn load_manifest(path: &Path) -> Result<TwaManifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read manifest {}: {}", path.display(), e))
    })?;

    let format = ManifestFormat::from_path(path);
    let manifest = parse_manifest(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        shortcuts = manifest.shortcuts.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<TwaManifest> {
    let manifest = match format {
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Toml => toml_edit::de::from_str(content)?,
    };
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::FallbackType;

    const MINIMAL_JSON: &str = r##"{
        "applicationId": "app.example.twa",
        "hostName": "example.com",
        "launchUrl": "/",
        "name": "Example",
        "launcherName": "Ex",
        "themeColor": "#2563EB",
        "navigationColor": "#2563EB",
        "navigationColorDark": "#0f172ab3",
        "navigationDividerColor": "#2563EB",
        "navigationDividerColorDark": "#0f172ab3",
        "backgroundColor": "#2563EB"
    }"##;

    #[test]
    fn test_defaults_applied_on_load() {
        let manifest = parse_manifest(MINIMAL_JSON, ManifestFormat::Json).unwrap();
        assert!(!manifest.enable_notifications);
        assert!(manifest.shortcuts.is_empty());
        assert_eq!(manifest.splash_screen_fade_out_duration, 300);
        assert_eq!(manifest.generator_app, "bubblewrap-cli");
        assert_eq!(manifest.fallback_type, FallbackType::CustomTabs);
        assert!(manifest.enable_site_settings_shortcut);
        assert_eq!(manifest.orientation, "portrait");
        assert_eq!(manifest.web_manifest_url, None);
    }

    #[test]
    fn test_site_settings_flag_accepts_string() {
        let json = MINIMAL_JSON.replacen(
            "\"launchUrl\"",
            "\"enableSiteSettingsShortcut\": \"false\", \"launchUrl\"",
            1,
        );
        let manifest = parse_manifest(&json, ManifestFormat::Json).unwrap();
        assert!(!manifest.enable_site_settings_shortcut);

        let json = MINIMAL_JSON.replacen(
            "\"launchUrl\"",
            "\"enableSiteSettingsShortcut\": \"maybe\", \"launchUrl\"",
            1,
        );
        assert!(parse_manifest(&json, ManifestFormat::Json).is_err());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = MINIMAL_JSON.replace("\"hostName\": \"example.com\",", "");
        let err = parse_manifest(&json, ManifestFormat::Json).unwrap_err();
        assert!(matches!(err, Error::SerializationError(msg) if msg.contains("hostName")));
    }

    #[test]
    fn test_shortcut_short_name_alias_and_missing_fields() {
        let json = MINIMAL_JSON.replacen(
            "\"launchUrl\"",
            r#""shortcuts": [{"name": "Home", "short_name": "H", "url": "/"}], "launchUrl""#,
            1,
        );
        let manifest = parse_manifest(&json, ManifestFormat::Json).unwrap();
        assert_eq!(manifest.shortcuts[0].short_name.as_deref(), Some("H"));
        assert_eq!(manifest.shortcuts[0].icon, None);
    }

    #[test]
    fn test_toml_manifest() {
        let toml = r##"
applicationId = "app.example.twa"
hostName = "example.com"
launchUrl = "/start"
name = "Example"
launcherName = "Ex"
themeColor = "#2563EB"
navigationColor = "#2563EB"
navigationColorDark = "#000000"
navigationDividerColor = "#2563EB"
navigationDividerColorDark = "#000000"
backgroundColor = "#FFFFFF"
fallbackType = "webview"
splashScreenFadeOutDuration = 0

[[shortcuts]]
name = "Home"
shortName = "Home"
url = "/"
icon = "ic_home"
"##;
        let manifest = parse_manifest(toml, ManifestFormat::Toml).unwrap();
        assert_eq!(manifest.fallback_type, FallbackType::WebView);
        assert_eq!(manifest.splash_screen_fade_out_duration, 0);
        assert_eq!(manifest.shortcuts.len(), 1);
        assert_eq!(manifest.shortcuts[0].icon.as_deref(), Some("ic_home"));
    }

    #[test]
    fn test_demo_manifests_are_valid() {
        let json = include_str!("../../demos/twa-manifest.json");
        let manifest = parse_manifest(json, ManifestFormat::Json).unwrap();
        assert!(crate::manifest::collect_issues(&manifest).is_empty());

        let toml = include_str!("../../demos/twa-manifest.toml");
        let manifest = parse_manifest(toml, ManifestFormat::Toml).unwrap();
        assert!(crate::manifest::collect_issues(&manifest).is_empty());
        assert!(!manifest.enable_site_settings_shortcut);
        assert_eq!(manifest.shortcuts[1].short_name.as_deref(), Some("History"));
    }

    #[test]
    fn test_load_from_disk_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twa-manifest.json");
        fs::write(&path, MINIMAL_JSON).unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.host_name, "example.com");
        assert_eq!(ManifestFormat::from_path(Path::new("a/b.TOML")), ManifestFormat::Toml);

        let missing = load_manifest(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, Error::ConfigError(_)));
    }
}
