use sensu_event::{MetricPoint, StringMap};
use serde::{Deserialize, Serialize};
use snafu::ResultExt as _;

use crate::{
    build_tag, entity_name_tag, normalize_timestamp, InvalidTimestamp, TimestampError, ValidationError,
    ENTITY_LABEL_PREFIX,
};

/// Indexed document for a single metric point.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MetricValue {
    /// Point timestamp, as RFC 3339 with second precision.
    pub timestamp: String,

    /// Metric name.
    pub name: String,

    /// Name of the entity that reported the point.
    pub entity: String,

    /// Measured value.
    pub value: f64,

    /// Namespace of the entity that reported the point.
    pub namespace: String,

    /// Point tags, then entity labels, then the entity name tag.
    pub tags: Vec<String>,
}

/// Derives the metric name for a point.
///
/// Point names conventionally take the form `<metric>.<suffix...>`. Unless `point_name_as_metric_name` is set, only
/// the part before the first `.` is kept.
pub fn metric_name(point_name: &str, point_name_as_metric_name: bool) -> &str {
    if point_name_as_metric_name {
        return point_name;
    }

    point_name.split_once('.').map_or(point_name, |(metric, _)| metric)
}

/// Builds the document for a single metric point.
///
/// Tags are assembled in a fixed order: the point's own tags as `<name>_<value>`, then each entity label as
/// `entity_<key>_<value>` in label order, and finally `sensu_entity_name_<entity_name>`. Duplicates are kept.
///
/// # Errors
///
/// If the point timestamp cannot be normalized, an error is returned and no document is produced.
pub fn extract_metric(
    point: &MetricPoint, entity_name: &str, namespace: &str, entity_labels: &StringMap, point_name_as_metric_name: bool,
) -> Result<MetricValue, ValidationError> {
    extract_metric_with(
        normalize_timestamp,
        point,
        entity_name,
        namespace,
        entity_labels,
        point_name_as_metric_name,
    )
}

pub(crate) fn extract_metric_with<F>(
    normalize: F, point: &MetricPoint, entity_name: &str, namespace: &str, entity_labels: &StringMap,
    point_name_as_metric_name: bool,
) -> Result<MetricValue, ValidationError>
where
    F: FnOnce(i64) -> Result<String, TimestampError>,
{
    let timestamp = normalize(point.timestamp()).context(InvalidTimestamp)?;

    let mut tags = Vec::with_capacity(point.tags().len() + entity_labels.len() + 1);
    tags.extend(point.tags().iter().map(|tag| build_tag(tag.name(), tag.value(), "")));
    tags.extend(
        entity_labels
            .iter()
            .map(|(key, value)| build_tag(key, value, ENTITY_LABEL_PREFIX)),
    );
    tags.push(entity_name_tag(entity_name));

    Ok(MetricValue {
        timestamp,
        name: metric_name(point.name(), point_name_as_metric_name).to_string(),
        entity: entity_name.to_string(),
        value: point.value(),
        namespace: namespace.to_string(),
        tags,
    })
}
