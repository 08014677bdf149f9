//! App shortcuts XML (`res/xml/shortcuts.xml`).
//!
//! Each manifest shortcut becomes a `<shortcut>` whose labels point at the
//! `shortcut_name_{i}` / `shortcut_short_name_{i}` string resources and whose
//! intent opens the shell's launcher activity on the shortcut URL.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::constants::{ANDROID_NAMESPACE, LAUNCHER_ACTIVITY};
use crate::error::Result;
use crate::manifest::{check_shortcuts, ShortcutEntry, TwaManifest};
use crate::resources::render::finish;

/// Validate the shortcut list and render the shortcuts document.
pub fn render_shortcuts_xml(manifest: &TwaManifest) -> Result<String> {
    let entries = check_shortcuts(&manifest.shortcuts)?;
    render_entries(&manifest.application_id, &entries)
}

/// Render and write the shortcuts file, replacing whatever is at `path`.
///
/// Nothing is written when validation fails.
pub fn write_shortcuts_file(manifest: &TwaManifest, path: &Path) -> Result<usize> {
    let xml = render_shortcuts_xml(manifest)?;
    crate::util::atomic_write(path, xml.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        shortcuts = manifest.shortcuts.len(),
        "wrote shortcuts file"
    );
    Ok(manifest.shortcuts.len())
}

pub(crate) fn render_entries(application_id: &str, entries: &[ShortcutEntry<'_>]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    if entries.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("shortcuts")))?;
        return finish(writer);
    }

    let mut root = BytesStart::new("shortcuts");
    root.push_attribute(("xmlns:android", ANDROID_NAMESPACE));
    writer.write_event(Event::Start(root))?;

    let target_class = format!("{application_id}.{LAUNCHER_ACTIVITY}");
    for entry in entries {
        let id = format!("shortcut{}", entry.index);
        let icon = format!("@drawable/{}", entry.icon);
        let short_label = format!("@string/shortcut_short_name_{}", entry.index);
        let long_label = format!("@string/shortcut_name_{}", entry.index);

        let mut shortcut = BytesStart::new("shortcut");
        shortcut.push_attribute(("android:shortcutId", id.as_str()));
        shortcut.push_attribute(("android:enabled", "true"));
        shortcut.push_attribute(("android:icon", icon.as_str()));
        shortcut.push_attribute(("android:shortcutShortLabel", short_label.as_str()));
        shortcut.push_attribute(("android:shortcutLongLabel", long_label.as_str()));
        writer.write_event(Event::Start(shortcut))?;

        let mut intent = BytesStart::new("intent");
        intent.push_attribute(("android:action", "android.intent.action.MAIN"));
        intent.push_attribute(("android:targetPackage", application_id));
        intent.push_attribute(("android:targetClass", target_class.as_str()));
        intent.push_attribute(("android:data", entry.url));
        writer.write_event(Event::Empty(intent))?;

        let mut categories = BytesStart::new("categories");
        categories.push_attribute(("android:name", "android.intent.category.LAUNCHER"));
        writer.write_event(Event::Empty(categories))?;

        writer.write_event(Event::End(BytesEnd::new("shortcut")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("shortcuts")))?;
    finish(writer)
}
