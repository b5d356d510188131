use std::io;

use pushover::{AppToken, PushoverClient, Receipt};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = AppToken::new(required_env("PUSHOVER_TOKEN")?)?;
    let receipt = Receipt::new(required_env("PUSHOVER_RECEIPT")?)?;

    let client = PushoverClient::new(token)?;
    let details = client.receipt_details(&receipt)?;
    println!("{details:#?}");

    if !details.acknowledged && !details.expired && std::env::var("PUSHOVER_CANCEL").is_ok() {
        let response = client.cancel_emergency(&receipt)?;
        println!("cancelled: {response}");
    }

    Ok(())
}
