use serde::{Deserialize, Serialize};

/// Flat book record handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: u32,
    pub price: f64,
}

/// One element of a bookseller response, before normalization.
///
/// Both wire formats decode into this shape. Every field is required, so a
/// record without its `stock` block is rejected at decode time instead of
/// producing a half-filled [`Book`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookResponse {
    pub book: BookDetails,
    pub stock: StockDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockDetails {
    pub quantity: u32,
    pub price: f64,
}

impl From<BookResponse> for Book {
    fn from(response: BookResponse) -> Self {
        let BookResponse { book, stock } = response;
        Book {
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            quantity: stock.quantity,
            price: stock.price,
        }
    }
}

/// Converts a wire record into a [`Book`]. Values pass through untouched.
pub fn normalize(response: BookResponse) -> Book {
    Book::from(response)
}

/// Normalizes a whole response, keeping the server's ordering.
pub fn normalize_all(responses: Vec<BookResponse>) -> Vec<Book> {
    responses.into_iter().map(normalize).collect()
}
