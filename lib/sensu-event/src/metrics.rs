use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// A tag attached to a metric point.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricTag {
    #[serde(default)]
    name: String,

    #[serde(default)]
    value: String,
}

impl MetricTag {
    /// Creates a new `MetricTag`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A single named, timestamped measurement.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MetricPoint {
    #[serde(default)]
    name: String,

    #[serde(default)]
    value: f64,

    #[serde(default)]
    timestamp: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<MetricTag>,
}

impl MetricPoint {
    /// Creates a new `MetricPoint` with no tags.
    pub fn new(name: impl Into<String>, value: f64, timestamp: i64) -> Self {
        Self {
            name: name.into(),
            value,
            timestamp,
            tags: Vec::new(),
        }
    }

    /// Returns the point name.
    ///
    /// By convention this is often a dotted path, such as `avg_cpu.max`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the measured value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the timestamp of the point.
    ///
    /// The unit is not declared by the producer: agents report seconds, but milliseconds and nanoseconds show up in
    /// practice.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the tags of the point, in the order they were reported.
    pub fn tags(&self) -> &[MetricTag] {
        &self.tags
    }

    /// Appends a tag.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(MetricTag::new(name, value));
        self
    }
}

/// Metrics block of an event.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Metrics {
    #[serde(default, deserialize_with = "null_as_default")]
    handlers: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    points: Vec<MetricPoint>,
}

impl Metrics {
    /// Creates a new `Metrics` block from the given points.
    pub fn new(points: Vec<MetricPoint>) -> Self {
        Self {
            handlers: Vec::new(),
            points,
        }
    }

    /// Returns the handlers that metrics should be routed to.
    pub fn handlers(&self) -> &[String] {
        &self.handlers
    }

    /// Returns the metric points.
    pub fn points(&self) -> &[MetricPoint] {
        &self.points
    }
}
