use std::io;

use postageapp::{ApiKey, Message, PostageClient, Recipient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("POSTAGEAPP_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTAGEAPP_API_KEY environment variable is required",
        )
    })?;
    let recipient = std::env::var("POSTAGEAPP_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTAGEAPP_RECIPIENT environment variable is required",
        )
    })?;
    let uid = std::env::var("POSTAGEAPP_UID").unwrap_or_else(|_| {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        format!("demo-{nanos}")
    });

    let mut message = Message::new(uid)
        .recipient(Recipient::new(recipient))
        .subject("Hello from the postageapp demo")
        .text("This is my text content ☃☃");
    if let Ok(address) = std::env::var("POSTAGEAPP_RECIPIENT_OVERRIDE") {
        message = message.recipient_override(address);
    }

    let client = PostageClient::new(ApiKey::new(api_key)?);
    let response = client.send_message(&message).await?;
    println!(
        "status: {}, uid: {:?}, message id: {}, url: {}",
        response.response.status, response.response.uid, response.data.id, response.data.url
    );

    Ok(())
}
