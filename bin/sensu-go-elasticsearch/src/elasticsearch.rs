use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use reqwest::{header::CONTENT_TYPE, Certificate, Client, Url};
use sensu_error::{generic_error, ErrorContext as _, GenericError};

use crate::{config::Config, handler::DocumentSink};

struct Credentials {
    username: String,
    password: Option<String>,
}

/// Minimal Elasticsearch client that indexes single documents.
pub struct ElasticsearchClient {
    inner: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ElasticsearchClient {
    /// Creates a new `ElasticsearchClient` from the handler configuration.
    ///
    /// Credentials embedded in the connection URL are removed from it and sent as HTTP basic auth instead. When a
    /// trusted CA file is configured it is added to the set of root certificates; otherwise, certificate verification
    /// can be disabled entirely with `insecure_skip_verify`.
    ///
    /// # Errors
    ///
    /// If the connection URL is invalid, the CA file cannot be read or parsed, or the HTTP client cannot be built, an
    /// error is returned.
    pub fn from_config(config: &Config) -> Result<Self, GenericError> {
        // The URL is left out of the error; it may carry credentials.
        let mut base_url = Url::parse(&config.elasticsearch_url).error_context("Invalid Elasticsearch URL.")?;
        if base_url.cannot_be_a_base() {
            return Err(generic_error!("Invalid Elasticsearch URL: not a base URL."));
        }

        let credentials = if base_url.username().is_empty() {
            None
        } else {
            Some(Credentials {
                username: decode_userinfo(base_url.username())?,
                password: base_url.password().map(decode_userinfo).transpose()?,
            })
        };
        base_url
            .set_username("")
            .map_err(|()| generic_error!("Failed to remove username from Elasticsearch URL."))?;
        base_url
            .set_password(None)
            .map_err(|()| generic_error!("Failed to remove password from Elasticsearch URL."))?;

        let mut builder = Client::builder();
        if !config.trusted_ca_file.is_empty() {
            let pem = std::fs::read(&config.trusted_ca_file)
                .with_error_context(|| format!("Failed to read trusted CA file '{}'.", config.trusted_ca_file))?;
            let certificate = Certificate::from_pem(&pem)
                .with_error_context(|| format!("Failed to parse trusted CA file '{}'.", config.trusted_ca_file))?;
            builder = builder.add_root_certificate(certificate);
        } else if config.insecure_skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder.build().error_context("Failed to build Elasticsearch HTTP client.")?;

        Ok(Self {
            inner,
            base_url,
            credentials,
        })
    }

    fn document_url(&self, index: &str) -> Result<Url, GenericError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| generic_error!("Invalid Elasticsearch URL: not a base URL."))?
            .pop_if_empty()
            .push(index)
            .push("_doc");
        url.query_pairs_mut().append_pair("refresh", "true");

        Ok(url)
    }
}

/// Decodes a percent-encoded username or password taken from a URL.
fn decode_userinfo(encoded: &str) -> Result<String, GenericError> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(String::from)
        .error_context("Elasticsearch URL credentials are not valid UTF-8.")
}

#[async_trait]
impl DocumentSink for ElasticsearchClient {
    async fn index_document(&self, index: &str, document: String) -> Result<(), GenericError> {
        let mut request = self
            .inner
            .post(self.document_url(index)?)
            .header(CONTENT_TYPE, "application/json")
            .body(document);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, credentials.password.as_ref());
        }

        let response = request.send().await.error_context("Error getting response.")?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_else(|_| String::from("<no body>"));
            Err(generic_error!("[{}] Error indexing document: {}", status, body))
        }
    }
}
