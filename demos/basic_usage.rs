//! Basic usage example
//!
//! Usage:
//!   cargo run --example basic_usage

use faceid_client::{media, ApiClient, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configuration
    let config = ClientConfig {
        host: std::env::var("FACEID_HOST").unwrap_or_else(|_| "localhost:8000".to_string()),
        username: std::env::var("FACEID_USER").unwrap_or_else(|_| "demo".to_string()),
        password: std::env::var("FACEID_PASSWORD").unwrap_or_else(|_| "demo".to_string()),
        client_id: std::env::var("FACEID_CLIENT_ID").unwrap_or_default(),
        client_secret: std::env::var("FACEID_CLIENT_SECRET").unwrap_or_default(),
    };

    println!("=== FaceId Client Example ===");
    println!("Host: {}", config.host);
    println!();

    let client = ApiClient::new(config);

    // Explicit login; any other call would also log in lazily on first use
    client.login().await?;
    println!(
        "✓ Logged in (authenticated = {})",
        client.session().is_authenticated()
    );
    println!();

    // Look up a person from a face image supplied on disk
    match std::env::var("FACEID_IMAGE") {
        Ok(path) => {
            let bytes = std::fs::read(&path)?;
            let image = media::encode_image(&bytes);

            println!("Looking up person from {path}...");
            match client.get_person_id(&image).await? {
                Some(id) => {
                    println!("✓ Matched person id {id}");
                    if let Some(info) = client.get_person_info(id).await? {
                        println!("  Info: {}", serde_json::to_string_pretty(&info)?);
                    }
                }
                None => println!("No matching person"),
            }
        }
        Err(_) => {
            println!("Set FACEID_IMAGE to a JPEG path to run a face lookup");
        }
    }

    Ok(())
}
