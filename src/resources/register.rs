use crate::error::Result;
use crate::manifest::{check_shortcuts, ShortcutEntry, TwaManifest};

use super::types::{ResourceSet, ResourceType};

/// Map every manifest field to its named build resource.
///
/// Shortcut labels are read from the shortcut list, so the shortcut
/// preconditions are checked here too.
pub fn register_resources(manifest: &TwaManifest) -> Result<ResourceSet> {
    let shortcuts = check_shortcuts(&manifest.shortcuts)?;
    register_entries(manifest, &shortcuts)
}

/// Registration over shortcut entries that were already checked.
pub fn register_entries(manifest: &TwaManifest, shortcuts: &[ShortcutEntry<'_>]) -> Result<ResourceSet> {
    use ResourceType::{Bool, Color, Integer, String as Str};

    let mut set = ResourceSet::new();

    set.insert(Str, "appName", &manifest.name)?;
    set.insert(Str, "launcherName", &manifest.launcher_name)?;
    set.insert(Str, "launchUrl", manifest.full_launch_url())?;
    if let Some(url) = &manifest.web_manifest_url {
        set.insert(Str, "webManifestUrl", url)?;
    }
    if let Some(url) = &manifest.full_scope_url {
        set.insert(Str, "fullScopeUrl", url)?;
    }
    set.insert(Str, "hostName", &manifest.host_name)?;

    set.insert(Color, "colorPrimary", &manifest.theme_color)?;
    set.insert(Color, "navigationColor", &manifest.navigation_color)?;
    set.insert(Color, "navigationColorDark", &manifest.navigation_color_dark)?;
    set.insert(Color, "navigationDividerColor", &manifest.navigation_divider_color)?;
    set.insert(Color, "navigationDividerColorDark", &manifest.navigation_divider_color_dark)?;
    set.insert(Color, "backgroundColor", &manifest.background_color)?;

    set.insert(Str, "providerAuthority", manifest.provider_authority())?;
    set.insert(Bool, "enableNotification", manifest.enable_notifications.to_string())?;

    for shortcut in shortcuts {
        set.insert(Str, format!("shortcut_name_{}", shortcut.index), shortcut.name)?;
        set.insert(Str, format!("shortcut_short_name_{}", shortcut.index), shortcut.short_name)?;
    }

    set.insert(
        Integer,
        "splashScreenFadeOutDuration",
        manifest.splash_screen_fade_out_duration.to_string(),
    )?;
    set.insert(Str, "generatorApp", &manifest.generator_app)?;
    set.insert(Str, "fallbackType", manifest.fallback_type.as_str())?;
    set.insert(
        Bool,
        "enableSiteSettingsShortcut",
        manifest.enable_site_settings_shortcut.to_string(),
    )?;
    set.insert(Str, "orientation", &manifest.orientation)?;

    tracing::debug!(count = set.len(), "registered resources");
    Ok(set)
}
