//! Example: Client-side rate limiting.
//!
//! Run with: cargo run --example rate_limit

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use scryfall_api_client::rate_limit::{DEFAULT_REQUESTS_PER_SECOND, RateLimiter};
use scryfall_api_client::rest::ScryfallClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Default limit: {} requests/second", DEFAULT_REQUESTS_PER_SECOND);

    // A standalone limiter: the first admission is immediate, the next one waits.
    let limiter = RateLimiter::per_second(NonZeroU32::new(4).unwrap());
    limiter.acquire().await;
    match limiter.try_acquire() {
        Ok(()) => println!("Admitted immediately"),
        Err(wait) => println!("Next admission in {:?}", wait),
    }

    // Slow a client down to 2 requests per second.
    let client = ScryfallClient::builder()
        .rate_limiter(Some(RateLimiter::per_second(NonZeroU32::new(2).unwrap())))
        .build()?;

    let start = Instant::now();
    for _ in 0..3 {
        let card = client.get_random_card().await?;
        println!("{:>6?} {}", start.elapsed(), card.name);
    }

    // Waiting for admission is abandoned when the call is dropped.
    match tokio::time::timeout(Duration::from_millis(50), client.get_random_card()).await {
        Ok(result) => println!("Finished in time: {}", result?.name),
        Err(_) => println!("Gave up waiting for the rate limiter"),
    }

    Ok(())
}
