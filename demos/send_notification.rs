use std::io;
use std::time::Duration;

use pushover::{AppToken, Notification, Priority, PushoverClient, UserKey};

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
    let message = std::env::var("PUSHOVER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the pushover demo.".to_owned());

    let mut notification = Notification::with_title(message, "pushover demo");
    if std::env::var("PUSHOVER_EMERGENCY").is_ok() {
        notification.priority = Priority::EMERGENCY;
        notification.retry = Some(Duration::from_secs(60));
        notification.expire = Some(Duration::from_secs(3600));
    }
    if let Ok(path) = std::env::var("PUSHOVER_ATTACHMENT") {
        notification = notification.attach_file(path);
    }

    let client = PushoverClient::builder(token)
        .timeout(Duration::from_secs(30))
        .build()?;
    let response = client.send_notification(&user, notification)?;
    println!("{response}");

    Ok(())
}
