//! The fetch capability used by reachability checks and remote input
//! loading.
//!
//! Scoring rules never talk to an HTTP client directly; they take a
//! [`Fetch`] so that tests (and offline runs) can substitute a
//! deterministic [`FixedFetcher`]. Reachability checks go through
//! [`Fetch::is_reachable`], which downgrades every transport failure to
//! "not reachable" instead of propagating it.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ScoreError;
use scores_vocab::reference::RDF_MEDIA_TYPES;

/// The result of fetching a URI.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// True when the server answered with a success status.
    pub success: bool,
    /// The `Content-Type` of the response, without parameters.
    pub media_type: Option<String>,
    /// The response body.
    pub body: String,
}

/// Capability to retrieve a remote document.
pub trait Fetch {
    /// Fetches the URI, following redirects, optionally sending an `Accept`
    /// header.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Http`] on transport failure. A response with a
    /// non-success status is not an error; it comes back with
    /// `success == false`.
    fn fetch(&self, uri: &str, accept: Option<&str>) -> Result<FetchResponse, ScoreError>;

    /// Probes the URI and reports whether it answered successfully.
    /// Transport failures count as unreachable.
    fn is_reachable(&self, uri: &str, accept: Option<&str>) -> bool {
        match self.fetch(uri, accept) {
            Ok(response) => response.success,
            Err(error) => {
                debug!(uri, %error, "treating fetch failure as unreachable");
                false
            }
        }
    }
}

/// The `Accept` header value used when probing for RDF content.
#[must_use]
pub fn rdf_accept_header() -> String {
    RDF_MEDIA_TYPES.join(", ")
}

/// [`Fetch`] implementation over a blocking HTTP client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the client's default timeout and redirect
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Http`] when the underlying client cannot be
    /// constructed.
    pub fn new() -> Result<Self, ScoreError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ScoreError::Http {
                uri: String::new(),
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, uri: &str, accept: Option<&str>) -> Result<FetchResponse, ScoreError> {
        let mut request = self.client.get(uri);
        if let Some(accept) = accept {
            request = request.header(reqwest::header::ACCEPT, accept);
        }
        let response = request.send().map_err(|e| ScoreError::Http {
            uri: uri.to_owned(),
            message: e.to_string(),
        })?;

        let success = response.status().is_success();
        let media_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_owned());
        let body = response.text().map_err(|e| ScoreError::Http {
            uri: uri.to_owned(),
            message: e.to_string(),
        })?;

        Ok(FetchResponse {
            success,
            media_type,
            body,
        })
    }
}

/// Deterministic [`Fetch`] over a fixed table of URIs. Unknown URIs behave
/// like a transport failure.
#[derive(Debug, Clone, Default)]
pub struct FixedFetcher {
    pages: BTreeMap<String, FetchResponse>,
}

impl FixedFetcher {
    /// A fetcher that knows no URIs: every probe fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fetcher for which the given URIs answer successfully with an empty
    /// body.
    #[must_use]
    pub fn reachable<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fetcher = Self::default();
        for uri in uris {
            fetcher.pages.insert(
                uri.into(),
                FetchResponse {
                    success: true,
                    media_type: None,
                    body: String::new(),
                },
            );
        }
        fetcher
    }

    /// Registers a successful response body for a URI.
    pub fn with_page(
        mut self,
        uri: impl Into<String>,
        media_type: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.pages.insert(
            uri.into(),
            FetchResponse {
                success: true,
                media_type: Some(media_type.into()),
                body: body.into(),
            },
        );
        self
    }
}

impl Fetch for FixedFetcher {
    fn fetch(&self, uri: &str, _accept: Option<&str>) -> Result<FetchResponse, ScoreError> {
        self.pages
            .get(uri)
            .cloned()
            .ok_or_else(|| ScoreError::Http {
                uri: uri.to_owned(),
                message: "no fixture registered for this URI".to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_uris_are_unreachable_not_fatal() {
        let fetcher = FixedFetcher::empty();
        assert!(!fetcher.is_reachable("https://example.com/nowhere", None));
    }

    #[test]
    fn registered_uris_answer() {
        let fetcher = FixedFetcher::reachable(["https://example.com/cat"]);
        assert!(fetcher.is_reachable("https://example.com/cat", Some(&rdf_accept_header())));
    }
}
