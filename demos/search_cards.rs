//! Example: Search for cards and walk every result page.
//!
//! Run with: cargo run --example search_cards -- "t:goblin c:red"

use scryfall_api_client::rest::ScryfallClient;
use scryfall_api_client::rest::public::{Card, SearchCardsOptions, SortOrder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "t:goblin c:red cmc=1".to_string());

    let client = ScryfallClient::new()?;
    let options = SearchCardsOptions {
        order: Some(SortOrder::Name),
        ..Default::default()
    };

    let first = client.search_cards(&query, &options).await?;
    println!(
        "{} cards match {:?}",
        first.total_cards.unwrap_or_default(),
        query
    );
    for warning in &first.warnings {
        println!("warning: {}", warning);
    }
    print_cards(&first.cards);

    // Later pages are fetched with the absolute next_page URL.
    let mut next_page = first.next_page.filter(|_| first.has_more);
    while let Some(url) = next_page {
        let page = client.list_page::<Vec<Card>>(&url).await?;
        print_cards(&page.data);
        next_page = page.next_page().map(str::to_string);
    }

    Ok(())
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        let price = card
            .prices
            .usd
            .map(|usd| format!("${}", usd))
            .unwrap_or_else(|| "-".to_string());
        println!("{:<40} {:>6} {:>8}", card.name, card.set, price);
    }
}
