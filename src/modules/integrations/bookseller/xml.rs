use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::{RequestHandler, fetch_body};
use crate::domain::{Book, BookResponse, BooksellerError, ResponseFormat, normalize_all};

/// `<books><entry>..</entry>..</books>`. The root element name is not checked and
/// other root children are skipped, even between entries.
#[derive(Debug, Deserialize)]
struct BookResponseList {
    #[serde(rename = "entry", default)]
    entries: Vec<BookResponse>,
}

/// Asks for `application/xml` and reads the body as a raw document.
#[derive(Debug, Clone)]
pub struct XmlRequestHandler {
    http: reqwest::Client,
    endpoint: Url,
}

impl XmlRequestHandler {
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl RequestHandler for XmlRequestHandler {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Xml
    }

    async fn fetch_books(&self, author: &str, limit: u32) -> Result<Vec<Book>, BooksellerError> {
        let body = fetch_body(&self.http, &self.endpoint, self.format(), author, limit).await?;

        let books = normalize_all(parse_book_list(&body)?);

        tracing::debug!("Bookseller returned {} XML records", books.len());
        Ok(books)
    }
}

fn parse_book_list(xml: &str) -> Result<Vec<BookResponse>, BooksellerError> {
    let list: BookResponseList = quick_xml::de::from_str(xml)?;
    Ok(list.entries)
}
