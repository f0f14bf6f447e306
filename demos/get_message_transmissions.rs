use std::io;

use postageapp::{ApiKey, KnownStatus, PostageClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("POSTAGEAPP_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTAGEAPP_API_KEY environment variable is required",
        )
    })?;
    let uid = std::env::var("POSTAGEAPP_UID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTAGEAPP_UID environment variable is required",
        )
    })?;

    let client = PostageClient::new(ApiKey::new(api_key)?);
    let response = match client.get_message_transmissions(&uid).await {
        Ok(response) => response,
        Err(err) if err.status().and_then(|status| status.known_kind()) == Some(KnownStatus::NotFound) => {
            println!("no message with uid {uid}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("message id: {}", response.data.id);
    for (address, transmission) in &response.data.transmissions {
        println!(
            "{address}: {} {} {}",
            transmission.status, transmission.result_code, transmission.result_message
        );
    }

    Ok(())
}
