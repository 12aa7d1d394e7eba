//! Basic example demonstrating the scripture API client.
//!
//! Run with:
//! ```
//! SCRIPTURE_API_KEY=your-key cargo run --example basic
//! ```

use scripture_api::{
    BibleBooksParams, BiblesParams, CommonFetchParams, ContentType, ScriptureClient,
    ScriptureError, SearchParams,
};

#[tokio::main]
async fn main() -> scripture_api::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("SCRIPTURE_API_KEY").map_err(|_| {
        ScriptureError::InvalidParameter("SCRIPTURE_API_KEY is not set".to_string())
    })?;

    println!("Creating scripture client...");
    let client = ScriptureClient::new(api_key)?;
    println!("Connected to: {}", client.base_url());

    // English bibles
    println!("\n--- English Bibles ---");
    let bibles = client
        .get_bibles(&BiblesParams::new().language("eng"))
        .await?;
    let list = bibles["data"].as_array().cloned().unwrap_or_default();
    println!("Found {} bibles", list.len());
    for bible in list.iter().take(5) {
        println!("  - {} ({})", bible["name"], bible["id"]);
    }

    let Some(bible_id) = list
        .first()
        .and_then(|b| b["id"].as_str())
        .map(str::to_string)
    else {
        println!("\nNo bibles available");
        return Ok(());
    };

    // Books with their chapters
    println!("\n--- Books of {bible_id} ---");
    let books = client
        .get_bible_books(&bible_id, &BibleBooksParams::new().include_chapters(true))
        .await?;
    for book in books["data"].as_array().into_iter().flatten().take(5) {
        let chapters = book["chapters"].as_array().map_or(0, Vec::len);
        println!("  - {} ({} chapters)", book["name"], chapters);
    }

    // A verse as plain text
    println!("\n--- John 3:16 ---");
    let verse = client
        .get_bible_verse(
            &bible_id,
            "JHN.3.16",
            &CommonFetchParams::new()
                .content_type(ContentType::Text)
                .include_verse_numbers(true),
        )
        .await?;
    println!("{}", verse["data"]["content"].as_str().unwrap_or_default().trim());

    // Keyword search
    println!("\n--- Search: \"love\" ---");
    let results = client
        .search(&bible_id, &SearchParams::new("love").limit(3))
        .await?;
    println!("Total matches: {}", results["data"]["total"]);
    for hit in results["data"]["verses"].as_array().into_iter().flatten() {
        println!("  - {}: {}", hit["reference"], hit["text"]);
    }

    // A missing verse surfaces as an API error
    println!("\n--- Error handling ---");
    match client
        .get_bible_verse(&bible_id, "XYZ.1.1", &CommonFetchParams::default())
        .await
    {
        Ok(_) => println!("Unexpectedly found XYZ.1.1"),
        Err(e) => println!("{e} (status: {:?})", e.status_code()),
    }

    println!("\nDone!");
    Ok(())
}
