use std::io::Read;

use async_trait::async_trait;
use chrono::NaiveDate;
use sensu_documents::{extract_event, extract_metric};
use sensu_error::{generic_error, ErrorContext as _, GenericError};
use sensu_event::Event;
use tracing::debug;

use crate::config::Config;

/// A destination for serialized documents.
#[async_trait]
pub trait DocumentSink {
    /// Indexes a single JSON document into `index`.
    async fn index_document(&self, index: &str, document: String) -> Result<(), GenericError>;
}

/// Reads a single event from `reader`.
///
/// # Errors
///
/// If the input is not a valid event document, an error is returned.
pub fn read_event<R: Read>(reader: R) -> Result<Event, GenericError> {
    serde_json::from_reader(reader).error_context("Failed to parse event from standard input.")
}

/// Checks that an event can be handled at all.
///
/// # Errors
///
/// If the event has no entity, or the entity has no name, an error is returned.
pub fn validate_event(event: &Event) -> Result<(), GenericError> {
    match event.entity() {
        Some(entity) if !entity.name().is_empty() => Ok(()),
        _ => Err(generic_error!("event must contain an entity")),
    }
}

/// Settings that control how events are turned into documents.
pub struct HandlerOptions {
    /// Resolved index name, including the date suffix when dated indexes are enabled.
    pub index: String,

    /// Index the whole event as one document instead of one document per metric point.
    pub full_event_logging: bool,

    /// Use the full point name as the metric name instead of its first dot-separated segment.
    pub point_name_as_metric_name: bool,
}

impl HandlerOptions {
    /// Derives the handler options from the configuration, resolving the index name against `today`.
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        Self {
            index: config.index_name(today),
            full_event_logging: config.full_event_logging,
            point_name_as_metric_name: config.point_name_as_metric_name,
        }
    }
}

/// Turns events into documents and writes them to a sink.
pub struct Handler<S> {
    options: HandlerOptions,
    sink: S,
}

impl<S> Handler<S>
where
    S: DocumentSink,
{
    /// Creates a new `Handler`.
    pub fn new(options: HandlerOptions, sink: S) -> Self {
        Self { options, sink }
    }

    /// Handles a single event, returning the number of documents indexed.
    ///
    /// With full event logging, the whole event is indexed as one document. Otherwise each metric point is indexed as
    /// its own document, in order. Processing stops at the first document that fails; documents indexed before it
    /// are not rolled back.
    ///
    /// # Errors
    ///
    /// If the event has no metrics (and full event logging is disabled), or a document cannot be built, serialized, or
    /// indexed, an error is returned.
    pub async fn handle(&self, event: &Event) -> Result<usize, GenericError> {
        if self.options.full_event_logging {
            let event_value =
                extract_event(event).error_context("error processing sensu event into eventValue")?;
            let document =
                serde_json::to_string(&event_value).error_context("error serializing metric data to json payload")?;
            self.send(document).await?;

            return Ok(1);
        }

        let metrics = event
            .metrics()
            .ok_or_else(|| generic_error!("event does not contain metrics"))?;
        let entity = event
            .entity()
            .ok_or_else(|| generic_error!("event must contain an entity"))?;

        let mut indexed = 0;
        for point in metrics.points() {
            let metric = extract_metric(
                point,
                entity.name(),
                entity.namespace(),
                entity.labels(),
                self.options.point_name_as_metric_name,
            )
            .error_context("error processing sensu event MetricPoints into MetricValue")?;
            let document =
                serde_json::to_string(&metric).error_context("error serializing metric data to json payload")?;
            self.send(document).await?;

            debug!(metric = %metric.name, index = %self.options.index, "Indexed metric document.");
            indexed += 1;
        }

        Ok(indexed)
    }

    async fn send(&self, document: String) -> Result<(), GenericError> {
        self.sink
            .index_document(&self.options.index, document)
            .await
            .error_context("error sending metric data to elasticsearch")
    }
}
