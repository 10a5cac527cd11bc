use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookseller_client::{BooksellerClient, ClientConfig, ResponseFormat};

const DEFAULT_LIMIT: u32 = 10;

fn usage() -> ExitCode {
    eprintln!("Usage: bookseller-demo <author> [limit] [json|xml]");
    ExitCode::from(2)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookseller_client=info,bookseller_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(author) = args.next() else {
        return usage();
    };

    let limit = match args.next().map(|l| l.parse::<u32>()) {
        None => DEFAULT_LIMIT,
        Some(Ok(limit)) => limit,
        Some(Err(e)) => {
            eprintln!("Invalid limit: {}", e);
            return usage();
        }
    };

    let format = match args.next().map(|f| f.parse::<ResponseFormat>()) {
        None => None,
        Some(Ok(format)) => Some(format),
        Some(Err(e)) => {
            eprintln!("{}", e);
            return usage();
        }
    };

    let client = match BooksellerClient::new(ClientConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Fetching up to {} books by '{}' from {}",
        limit,
        author,
        client.endpoint()
    );

    match client.fetch_books_by_author(&author, limit, format).await {
        Ok(books) => {
            for book in &books {
                match serde_json::to_string(book) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::warn!("Failed to serialize book {}: {}", book.isbn, e),
                }
            }
            tracing::info!("Fetched {} books", books.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to fetch books: {}", e);
            ExitCode::FAILURE
        }
    }
}
