//! Example: Working with ScryfallError and ApiError.
//!
//! Run with: cargo run --example error_handling

use scryfall_api_client::ScryfallError;
use scryfall_api_client::error::{ApiError, codes};
use scryfall_api_client::rest::ScryfallClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_error = ApiError::new(404, codes::NOT_FOUND, "No card found with the given ID.");
    println!("API error: {}", api_error);
    println!("Is not found: {}", api_error.is_not_found());

    // Configuring both kinds of secret is rejected before any request is made.
    match ScryfallClient::builder()
        .client_secret("client-secret")
        .grant_secret("grant-secret")
        .build()
    {
        Err(ScryfallError::MultipleSecrets) => println!("Rejected conflicting secrets"),
        other => println!("Unexpected result: {:?}", other.map(|_| ())),
    }

    // A fuzzy name that matches several cards comes back as an ambiguous not_found.
    let client = ScryfallClient::new()?;
    match client.get_card_by_name("jace", false, &Default::default()).await {
        Ok(card) => println!("Found {}", card.name),
        Err(ScryfallError::Api(error)) if error.is_ambiguous() => {
            println!("Ambiguous name: {}", error.details);
        }
        Err(ScryfallError::Api(error)) if error.is_not_found() => {
            println!("No such card: {}", error.details);
        }
        Err(err) if err.is_timeout() => println!("Request timed out"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
