use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Android value resource types the shell reads at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    String,
    Color,
    Bool,
    Integer,
}

impl ResourceType {
    /// Element name in a `res/values` document, also the Gradle `resValue` type
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceType::String => "string",
            ResourceType::Color => "color",
            ResourceType::Bool => "bool",
            ResourceType::Integer => "integer",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub name: String,
    pub value: String,
}

/// Ordered resources with unique `(type, name)` keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceSet {
    entries: Vec<Resource>,
    #[serde(skip)]
    keys: HashSet<(ResourceType, String)>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ResourceType, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !self.keys.insert((kind, name.clone())) {
            return Err(Error::DuplicateResource {
                kind: kind.to_string(),
                name,
            });
        }
        self.entries.push(Resource {
            kind,
            name,
            value: value.into(),
        });
        Ok(())
    }

    pub fn get(&self, kind: ResourceType, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.kind == kind && r.name == name)
            .map(|r| r.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
