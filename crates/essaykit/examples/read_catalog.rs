//! Example: read every essay in the shipped catalog
//!
//! Run with: cargo run -p essaykit --example read_catalog
//!
//! Fetches live pages, so it needs network access.

use essaykit::{Reader, ESSAYS};

#[tokio::main]
async fn main() {
    let reader = Reader::default();
    let mut failed = 0;

    for (i, essay) in ESSAYS.iter().enumerate() {
        println!("{}. {}", i + 1, essay.title);
        println!("   URL: {}", essay.url);

        match reader.read(essay).await {
            Ok(content) => {
                let preview: String = content.markdown.chars().take(100).collect();
                println!("   Words: {}", content.word_count);
                println!("   Read time: {} minutes", content.read_minutes);
                println!("   Preview: {}\n", preview.replace('\n', " "));
            }
            Err(e) => {
                println!("   Error: {}\n", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
