//! Sensu Go event model.
//!
//! These types mirror the JSON documents a Sensu backend writes to a handler's standard input. Only the fields the
//! handler reads are modeled explicitly; everything else is retained verbatim so that an event can be passed through
//! to a downstream store without loss.
#![deny(warnings)]
#![deny(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod de;

mod meta;
pub use self::meta::{ObjectMeta, StringMap};

mod metrics;
pub use self::metrics::{MetricPoint, MetricTag, Metrics};

mod resource;
pub use self::resource::{Check, Entity};

/// A Sensu event.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Event {
    #[serde(default)]
    timestamp: i64,

    #[serde(default)]
    entity: Option<Entity>,

    #[serde(default)]
    check: Option<Check>,

    #[serde(default)]
    metrics: Option<Metrics>,

    #[serde(default)]
    metadata: ObjectMeta,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Event {
    /// Returns the timestamp of the event.
    ///
    /// Like metric point timestamps, the unit is not declared by the producer.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the entity the event describes, if any.
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Returns the check that produced the event, if any.
    pub fn check(&self) -> Option<&Check> {
        self.check.as_ref()
    }

    /// Returns the metrics block of the event, if any.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Returns the event metadata.
    pub fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    /// Returns `true` if the event carries a metrics block.
    ///
    /// A metrics block with no points still counts.
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Set the timestamp.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the entity.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_entity(mut self, entity: impl Into<Option<Entity>>) -> Self {
        self.entity = entity.into();
        self
    }

    /// Set the check.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_check(mut self, check: impl Into<Option<Check>>) -> Self {
        self.check = check.into();
        self
    }

    /// Set the metrics block.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_metrics(mut self, metrics: impl Into<Option<Metrics>>) -> Self {
        self.metrics = metrics.into();
        self
    }

    /// Set the event metadata.
    ///
    /// This variant is specifically for use in builder-style APIs.
    pub fn with_metadata(mut self, metadata: ObjectMeta) -> Self {
        self.metadata = metadata;
        self
    }
}
