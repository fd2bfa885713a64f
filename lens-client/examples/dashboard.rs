//! Dashboard example
//!
//! Loads every issue category from a running backend, prints the issue
//! table with split messages, and exports the ranking rows as CSV.
//!
//! Usage: cargo run --example dashboard -- http://localhost:8080 [token]

use anyhow::Result;
use lens_client::{CategoryStore, ClientConfig};
use lens_core::{issues_to_csv, split_message};
use shared::Category;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    let mut config = ClientConfig::new(&base_url).with_page_size(25);
    if let Some(token) = std::env::args().nth(2) {
        config = config.with_token(token);
    }

    let store = CategoryStore::new(&config)?;
    for (category, result) in store.load_all().await {
        match result {
            Ok(()) => tracing::info!(category = %category, "loaded"),
            Err(err) => tracing::warn!(category = %category, error = %err, "load failed"),
        }
    }

    let counts = store.counts();
    println!(
        "Issues — ranking: {}, conversion: {}, inventory: {}, account: {}, total: {}",
        counts.ranking,
        counts.conversion,
        counts.inventory,
        counts.account,
        counts.grand_total()
    );

    for category in Category::ISSUE_CATEGORIES {
        for row in store.rows(category) {
            let split = split_message(&row.message);
            println!("[{}] {} — {}", row.asin, row.issue_heading, split.main_text);
            if !split.highlighted_text.is_empty() {
                println!("    >> {}", split.highlighted_text);
            }
        }
    }

    let ranking_rows = store.rows(Category::Ranking);
    if !ranking_rows.is_empty() {
        println!("\n--- ranking.csv ---\n{}", issues_to_csv(&ranking_rows));
    }

    Ok(())
}
