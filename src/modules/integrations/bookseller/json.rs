use async_trait::async_trait;
use url::Url;

use super::{RequestHandler, fetch_body};
use crate::domain::{Book, BookResponse, BooksellerError, ResponseFormat, normalize_all};

/// Asks for `application/json` and decodes an array of wire records.
#[derive(Debug, Clone)]
pub struct JsonRequestHandler {
    http: reqwest::Client,
    endpoint: Url,
}

impl JsonRequestHandler {
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl RequestHandler for JsonRequestHandler {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Json
    }

    async fn fetch_books(&self, author: &str, limit: u32) -> Result<Vec<Book>, BooksellerError> {
        let body = fetch_body(&self.http, &self.endpoint, self.format(), author, limit).await?;

        let parsed: Vec<BookResponse> = serde_json::from_str(&body)?;
        let books = normalize_all(parsed);

        tracing::debug!("Bookseller returned {} JSON records", books.len());
        Ok(books)
    }
}
