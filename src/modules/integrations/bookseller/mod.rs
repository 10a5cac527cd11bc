//! Bookseller "by-author" API client
//!
//! The API serves the same records as a JSON array or as an XML document.
//! [`BooksellerClient`] hides that choice behind a [`ResponseFormat`] and always
//! hands back normalized [`Book`]s.

mod json;
mod xml;

pub use json::JsonRequestHandler;
pub use xml::XmlRequestHandler;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::{Book, BooksellerError, ResponseFormat};
use crate::infrastructure::ClientConfig;

/// One way of asking the bookseller for books and decoding the answer.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    fn format(&self) -> ResponseFormat;

    async fn fetch_books(&self, author: &str, limit: u32) -> Result<Vec<Book>, BooksellerError>;
}

/// Picks the handler that understands `format`.
pub fn handler_for(
    format: ResponseFormat,
    http: reqwest::Client,
    endpoint: Url,
) -> Box<dyn RequestHandler> {
    match format {
        ResponseFormat::Json => Box::new(JsonRequestHandler::new(http, endpoint)),
        ResponseFormat::Xml => Box::new(XmlRequestHandler::new(http, endpoint)),
    }
}

#[derive(Debug, Clone)]
pub struct BooksellerClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BooksellerClient {
    pub fn new(config: ClientConfig) -> Result<Self, BooksellerError> {
        Ok(Self {
            endpoint: config.endpoint()?,
            http: config.build_http_client()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches up to `limit` books by `author`. `None` means JSON.
    ///
    /// Exactly one GET is issued. Failures come back as-is from the handler.
    pub async fn fetch_books_by_author(
        &self,
        author: &str,
        limit: u32,
        format: Option<ResponseFormat>,
    ) -> Result<Vec<Book>, BooksellerError> {
        let format = format.unwrap_or_default();
        handler_for(format, self.http.clone(), self.endpoint.clone())
            .fetch_books(author, limit)
            .await
    }
}

/// Fetches books by author from the default bookseller endpoint.
pub async fn fetch_books_by_author(
    author: &str,
    limit: u32,
    format: Option<ResponseFormat>,
) -> Result<Vec<Book>, BooksellerError> {
    BooksellerClient::new(ClientConfig::default())?
        .fetch_books_by_author(author, limit, format)
        .await
}

/// Sends the by-author query and returns the raw body of a successful response.
async fn fetch_body(
    http: &reqwest::Client,
    endpoint: &Url,
    format: ResponseFormat,
    author: &str,
    limit: u32,
) -> Result<String, BooksellerError> {
    tracing::debug!(%endpoint, author, limit, %format, "Requesting books from bookseller");

    let limit = limit.to_string();
    let resp = http
        .get(endpoint.clone())
        .query(&[("author", author), ("limit", limit.as_str())])
        .header(ACCEPT, format.mime_type())
        .send()
        .await?;

    if !resp.status().is_success() {
        tracing::debug!("Bookseller API returned status: {}", resp.status());
    }

    let body = resp.error_for_status()?.text().await?;
    Ok(body)
}
