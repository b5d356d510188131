use std::io;

use pushover::{AppToken, GlanceUpdate, PushoverClient, UserKey};

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
    let percent = std::env::var("PUSHOVER_PERCENT")
        .ok()
        .map(|value| value.parse::<i32>())
        .transpose()?;

    let update = GlanceUpdate {
        title: "Build".to_owned(),
        text: std::env::var("PUSHOVER_TEXT").unwrap_or_else(|_| "running".to_owned()),
        percent,
        ..Default::default()
    };

    let client = PushoverClient::new(token)?;
    let response = client.send_glance(&user, update)?;
    println!("{response}");

    Ok(())
}
