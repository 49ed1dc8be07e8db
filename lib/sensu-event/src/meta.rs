use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::de::null_as_default;

/// Label or annotation set.
///
/// Entries keep the order in which they appeared in the source document, which is what makes tag synthesis from
/// labels deterministic.
pub type StringMap = IndexMap<String, String>;

/// Metadata attached to Sensu resources (events, entities, checks).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    namespace: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    labels: StringMap,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    annotations: StringMap,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    created_by: String,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ObjectMeta {
    /// Creates a new `ObjectMeta` with the given name and namespace.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace the resource belongs to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the labels of the resource.
    pub fn labels(&self) -> &StringMap {
        &self.labels
    }

    /// Returns the annotations of the resource.
    pub fn annotations(&self) -> &StringMap {
        &self.annotations
    }

    /// Returns the name of the user that created the resource, if known.
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Adds a label.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Adds an annotation.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}
