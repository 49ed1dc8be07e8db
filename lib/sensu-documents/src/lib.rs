//! Flat document shapes for indexing Sensu telemetry.
//!
//! Sensu events arrive with epoch timestamps of undeclared precision, structured tags, and entity labels. This crate
//! turns them into one of two fixed documents:
//!
//! - [`MetricValue`], one per metric point, built by [`extract_metric`]
//! - [`EventValue`], one per event, built by [`extract_event`]
//!
//! Every function here is pure: no I/O, no logging, no shared state. Callers decide what to do with a document that
//! cannot be built.
#![deny(warnings)]
#![deny(missing_docs)]

use snafu::Snafu;

mod event;
pub use self::event::{extract_event, EventValue};

mod metric;
pub use self::metric::{extract_metric, metric_name, MetricValue};

mod tags;
pub use self::tags::{build_tag, entity_name_tag, ENTITY_LABEL_PREFIX, ENTITY_NAME_TAG_PREFIX};

mod timestamp;
pub use self::timestamp::{format_epoch_seconds, normalize_timestamp, truncate_epoch_digits, EPOCH_SECONDS_DIGITS};

/// Timestamp normalization error.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum TimestampError {
    /// The truncated epoch digits could not be parsed as an integer.
    #[snafu(display("failed to parse epoch digits '{}': {}", digits, source))]
    Parse {
        /// Digits that failed to parse.
        digits: String,

        /// Error source.
        source: std::num::ParseIntError,
    },

    /// The epoch value does not correspond to a representable calendar date.
    #[snafu(display("epoch value {} is outside the representable date range", seconds))]
    OutOfRange {
        /// Epoch value, in seconds.
        seconds: i64,
    },
}

/// A document could not be built from its input.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum ValidationError {
    /// The timestamp of the point or event could not be normalized.
    #[snafu(display("failed to validate event: {}", source))]
    InvalidTimestamp {
        /// Error source.
        source: TimestampError,
    },
}
