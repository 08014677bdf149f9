use crate::constants::MAX_SHORTCUTS;
use crate::error::{Error, Result};

use super::types::{Shortcut, ShortcutEntry, TwaManifest};

/// Check the shortcut list and hand back borrowed, fully populated entries.
///
/// Fails on the first problem: the count limit first, then the first missing
/// field in list order.
pub fn check_shortcuts(shortcuts: &[Shortcut]) -> Result<Vec<ShortcutEntry<'_>>> {
    if shortcuts.len() > MAX_SHORTCUTS {
        return Err(Error::ShortcutLimitExceeded {
            count: shortcuts.len(),
        });
    }

    shortcuts
        .iter()
        .enumerate()
        .map(|(index, shortcut)| shortcut_entry(index, shortcut))
        .collect()
}

fn shortcut_entry(index: usize, shortcut: &Shortcut) -> Result<ShortcutEntry<'_>> {
    Ok(ShortcutEntry {
        index,
        name: require(&shortcut.name, index, "name")?,
        short_name: require(&shortcut.short_name, index, "shortName")?,
        url: require(&shortcut.url, index, "url")?,
        icon: require(&shortcut.icon, index, "icon")?,
    })
}

fn require<'a>(value: &'a Option<String>, index: usize, field: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or(Error::MissingShortcutField { index, field })
}

/// Fail-fast validation of the whole manifest
pub fn validate(manifest: &TwaManifest) -> Result<()> {
    check_shortcuts(&manifest.shortcuts)?;
    validate_fields(manifest)
}

/// Fail-fast validation of everything except the shortcut list
pub fn validate_fields(manifest: &TwaManifest) -> Result<()> {
    match field_issues(manifest).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every problem in the manifest, shortcuts first.
pub fn collect_issues(manifest: &TwaManifest) -> Vec<Error> {
    let mut issues = Vec::new();

    if manifest.shortcuts.len() > MAX_SHORTCUTS {
        issues.push(Error::ShortcutLimitExceeded {
            count: manifest.shortcuts.len(),
        });
    }
    for (index, shortcut) in manifest.shortcuts.iter().enumerate() {
        if let Err(err) = shortcut_entry(index, shortcut) {
            issues.push(err);
        }
    }

    issues.extend(field_issues(manifest));
    issues
}

fn field_issues(manifest: &TwaManifest) -> Vec<Error> {
    let mut issues = Vec::new();

    if let Err(err) = check_application_id(&manifest.application_id) {
        issues.push(err);
    }
    if let Err(err) = check_host_name(&manifest.host_name) {
        issues.push(err);
    }
    if !manifest.launch_url.starts_with('/') {
        issues.push(Error::InvalidField {
            field: "launchUrl",
            reason: format!("{:?} must start with '/'", manifest.launch_url),
        });
    }

    let colors = [
        ("themeColor", &manifest.theme_color),
        ("navigationColor", &manifest.navigation_color),
        ("navigationColorDark", &manifest.navigation_color_dark),
        ("navigationDividerColor", &manifest.navigation_divider_color),
        ("navigationDividerColorDark", &manifest.navigation_divider_color_dark),
        ("backgroundColor", &manifest.background_color),
    ];
    for (field, value) in colors {
        if !is_color(value) {
            issues.push(Error::InvalidColor {
                field,
                value: value.clone(),
            });
        }
    }

    issues
}

/// `#RRGGBB` or `#AARRGGBB`
pub fn is_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

fn check_application_id(id: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidField {
        field: "applicationId",
        reason: format!("{id:?} {reason}"),
    };

    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return Err(invalid("needs at least two dot-separated segments"));
    }
    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return Err(invalid("has a segment that does not start with a letter")),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("may only contain letters, digits and '_'"));
        }
    }
    Ok(())
}

fn check_host_name(host: &str) -> Result<()> {
    let reason = if host.is_empty() {
        "must not be empty"
    } else if host.contains("://") {
        "must not include a scheme"
    } else if host.contains('/') {
        "must not include a path"
    } else if host.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(Error::InvalidField {
        field: "hostName",
        reason: format!("{host:?} {reason}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::tests::sample_manifest;

    #[test]
    fn test_colors() {
        assert!(is_color("#2563EB"));
        assert!(is_color("#0f172ab3"));
        assert!(!is_color("2563EB"));
        assert!(!is_color("#2563E"));
        assert!(!is_color("#2563EBZZ"));
    }

    #[test]
    fn test_too_many_shortcuts() {
        let shortcuts = vec![Shortcut::new("a", "a", "/a", "ic_a"); 5];
        assert_eq!(
            check_shortcuts(&shortcuts).unwrap_err(),
            Error::ShortcutLimitExceeded { count: 5 }
        );
    }

    #[test]
    fn test_missing_icon_reports_index() {
        let mut shortcuts = vec![Shortcut::new("a", "a", "/a", "ic_a"); 3];
        shortcuts[2].icon = None;
        assert_eq!(
            check_shortcuts(&shortcuts).unwrap_err(),
            Error::MissingShortcutField { index: 2, field: "icon" }
        );
    }

    #[test]
    fn test_missing_url_is_not_reported_as_icon() {
        let mut shortcuts = vec![Shortcut::new("a", "a", "/a", "ic_a")];
        shortcuts[0].url = None;
        assert_eq!(
            check_shortcuts(&shortcuts).unwrap_err(),
            Error::MissingShortcutField { index: 0, field: "url" }
        );
    }

    #[test]
    fn test_entries_borrow_in_order() {
        let shortcuts = vec![
            Shortcut::new("Home", "Home", "/", "ic_home"),
            Shortcut::new("Create new", "Create", "/create", "ic_create"),
        ];
        let entries = check_shortcuts(&shortcuts).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].short_name, "Create");
        assert_eq!(entries[1].url, "/create");
    }

    #[test]
    fn test_sample_is_valid() {
        assert_eq!(validate(&sample_manifest()), Ok(()));
    }

    #[test]
    fn test_collects_every_issue() {
        let mut manifest = sample_manifest();
        manifest.theme_color = "blue".into();
        manifest.launch_url = "index.html".into();
        manifest.host_name = "https://example.com".into();
        manifest.application_id = "app".into();

        let issues = collect_issues(&manifest);
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&Error::InvalidColor {
            field: "themeColor",
            value: "blue".into()
        }));
        // Fail-fast reports the first one only
        assert!(validate(&manifest).is_err());
    }

    #[test]
    fn test_field_validation_ignores_shortcuts() {
        let mut manifest = sample_manifest();
        manifest.shortcuts = vec![Shortcut::default()];
        assert_eq!(validate_fields(&manifest), Ok(()));
        assert_eq!(
            validate(&manifest),
            Err(Error::MissingShortcutField { index: 0, field: "name" })
        );
    }

    #[test]
    fn test_application_id_segments() {
        assert!(check_application_id("app.vercel.easier_qurban_experience.twa").is_ok());
        assert!(check_application_id("com.1example").is_err());
        assert!(check_application_id("com.exa-mple").is_err());
        assert!(check_application_id("com..example").is_err());
    }
}
