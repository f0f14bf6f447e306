use std::io;

use postageapp::{ApiKey, PostageClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("POSTAGEAPP_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTAGEAPP_API_KEY environment variable is required",
        )
    })?;

    let mut builder = PostageClient::builder(ApiKey::new(api_key)?);
    if let Ok(base_url) = std::env::var("POSTAGEAPP_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let metrics = client.get_metrics().await?.data;
    for (bucket, metric) in [
        ("hour", &metrics.hour),
        ("date", &metrics.date),
        ("week", &metrics.week),
        ("month", &metrics.month),
    ] {
        match metric.as_ref().and_then(|metric| metric.delivered) {
            Some(delivered) => println!(
                "{bucket}: delivered {} ({:.2}%, {:+.2}% vs previous)",
                delivered.current_value, delivered.current_percent, delivered.diff_percent
            ),
            None => println!("{bucket}: no data"),
        }
    }

    Ok(())
}
