use sensu_event::{Check, Entity, Event, Metrics, ObjectMeta};
use serde::{Deserialize, Serialize};
use snafu::ResultExt as _;

use crate::{normalize_timestamp, InvalidTimestamp, TimestampError, ValidationError};

/// Indexed document for a full event.
///
/// Apart from the timestamp, every field is a verbatim copy of the corresponding part of the event.
///
/// # Wire format
///
/// The metrics block is serialized under the key `namespace`, not `metrics`. Existing indices and dashboards depend on
/// this layout, so the key is kept as-is even though it does not describe its contents.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EventValue {
    /// Event timestamp, as RFC 3339 with second precision.
    pub timestamp: String,

    /// Entity the event describes.
    pub entity: Option<Entity>,

    /// Check that produced the event.
    pub check: Option<Check>,

    /// Metrics block of the event.
    #[serde(rename = "namespace")]
    pub metrics: Option<Metrics>,

    /// Event metadata.
    pub metadata: ObjectMeta,
}

/// Builds the document for a full event.
///
/// # Errors
///
/// If the event timestamp cannot be normalized, an error is returned and no document is produced.
pub fn extract_event(event: &Event) -> Result<EventValue, ValidationError> {
    extract_event_with(normalize_timestamp, event)
}

pub(crate) fn extract_event_with<F>(normalize: F, event: &Event) -> Result<EventValue, ValidationError>
where
    F: FnOnce(i64) -> Result<String, TimestampError>,
{
    let timestamp = normalize(event.timestamp()).context(InvalidTimestamp)?;

    Ok(EventValue {
        timestamp,
        entity: event.entity().cloned(),
        check: event.check().cloned(),
        metrics: event.metrics().cloned(),
        metadata: event.metadata().clone(),
    })
}
