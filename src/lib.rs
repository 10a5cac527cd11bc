pub mod domain;
pub mod infrastructure;
pub mod modules;

pub use domain::{Book, BookDetails, BookResponse, BooksellerError, ResponseFormat, StockDetails};
pub use infrastructure::config;
pub use infrastructure::config::ClientConfig;
pub use modules::integrations::bookseller;
pub use modules::integrations::bookseller::{
    BooksellerClient, RequestHandler, fetch_books_by_author,
};
