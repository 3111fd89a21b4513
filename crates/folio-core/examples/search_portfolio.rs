//! Search the portfolio example

use folio_core::{Portfolio, Result};

fn main() -> Result<()> {
    // Get query and optional content file from args
    let args: Vec<String> = std::env::args().collect();
    let query = args.get(1).map(|s| s.as_str()).unwrap_or("react");
    let content_file = args.get(2).map(std::path::PathBuf::from);

    let portfolio = Portfolio::builder()
        .maybe_content_file(content_file)
        .build()?;

    println!("Searching for '{}'...", query);
    let results = portfolio.search_all(query, Some(10));

    println!("Found {} matches (showing at most 10):", results.len());
    for result in results {
        println!(
            "  - {} [{}] relevance={} -> {}",
            result.title, result.result_type, result.relevance, result.url
        );
    }

    Ok(())
}
