//! Domain layer - Pure bookseller abstractions
//!
//! No HTTP here. Record shapes, the response format enumeration, the
//! normalizer, and the error type every other layer returns.

pub mod book;
pub mod errors;
pub mod format;

pub use book::{Book, BookDetails, BookResponse, StockDetails, normalize, normalize_all};
pub use errors::BooksellerError;
pub use format::ResponseFormat;
