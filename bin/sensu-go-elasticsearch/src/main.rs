//! Sensu Go handler that indexes metrics and events into Elasticsearch.
//!
//! The handler reads a single event from standard input. By default, each metric point of the event becomes one
//! document; with full event logging, the event itself becomes the document.

#![deny(warnings)]
#![deny(missing_docs)]

use chrono::Local;
use clap::Parser as _;
use sensu_error::GenericError;
use tracing::{error, info};

mod config;
use self::config::Config;

mod elasticsearch;
use self::elasticsearch::ElasticsearchClient;

mod handler;
use self::handler::{read_event, validate_event, Handler, HandlerOptions};

mod logging;
use self::logging::{initialize_logging, LoggingConfiguration};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();

    let logging_config = match LoggingConfiguration::from_env() {
        Ok(logging_config) => logging_config,
        Err(e) => {
            eprintln!("FATAL: {:#}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = initialize_logging(logging_config) {
        eprintln!("FATAL: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(mut config: Config) -> Result<(), GenericError> {
    let event = read_event(std::io::stdin().lock())?;
    validate_event(&event)?;

    config.apply_annotations(&event)?;
    config.check_args()?;

    let client = ElasticsearchClient::from_config(&config)?;
    let options = HandlerOptions::from_config(&config, Local::now().date_naive());
    let index = options.index.clone();
    let handler = Handler::new(options, client);

    let indexed = handler.handle(&event).await?;
    info!(indexed, %index, "Handled event.");

    Ok(())
}
