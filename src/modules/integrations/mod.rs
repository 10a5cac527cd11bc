pub mod bookseller;
