use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};

use super::types::{ResourceSet, ResourceType};

/// Serialize resources as an Android `res/values` document.
pub fn render_values_xml(set: &ResourceSet) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    if set.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("resources")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("resources")))?;
        for resource in set {
            let mut element = BytesStart::new(resource.kind.tag());
            element.push_attribute(("name", resource.name.as_str()));
            writer.write_event(Event::Start(element))?;
            let value = resource_text(resource.kind, &resource.value);
            writer.write_event(Event::Text(BytesText::new(&value)))?;
            writer.write_event(Event::End(BytesEnd::new(resource.kind.tag())))?;
        }
        writer.write_event(Event::End(BytesEnd::new("resources")))?;
    }

    finish(writer)
}

/// Gradle `resValue(...)` lines, for build scripts that register values directly
pub fn render_gradle(set: &ResourceSet) -> String {
    set.iter()
        .map(|resource| {
            let value = resource_text(resource.kind, &resource.value);
            format!(
                "resValue(\"{}\", \"{}\", \"{}\")\n",
                resource.kind,
                resource.name,
                kotlin_escape(&value)
            )
        })
        .collect()
}

/// Plain aligned table for terminals
pub fn render_table(set: &ResourceSet) -> String {
    let width = set.iter().map(|r| r.name.len()).max().unwrap_or(0);
    set.iter()
        .map(|r| format!("{:<8} {:<width$} {}\n", r.kind.tag(), r.name, r.value))
        .collect()
}

pub(crate) fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| Error::XmlError(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn resource_text(kind: ResourceType, value: &str) -> String {
    match kind {
        ResourceType::String => android_escape(value),
        _ => value.to_string(),
    }
}

/// Escape a value for aapt string parsing. XML escaping happens afterwards.
pub fn android_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    if value.starts_with('@') || value.starts_with('?') {
        escaped.push('\\');
    }
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn kotlin_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }
    escaped
}
