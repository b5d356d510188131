use std::io;

use pushover::{AppToken, PushoverClient, PushoverError, UserKey};

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
    let user = UserKey::new(required_env("PUSHOVER_USER")?)?;

    let client = PushoverClient::new(token)?;
    match client.recipient_details(&user) {
        Ok(details) => println!("group: {}, devices: {:?}", details.group, details.devices),
        Err(PushoverError::InvalidRecipient(errors)) => println!("{errors}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
