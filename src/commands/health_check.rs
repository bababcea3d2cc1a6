//! Health check command implementation

use crate::{swc::SwcClient, Result};

/// Probe `/` and print the status line and body.
pub async fn handle_health_check(client: &SwcClient) -> Result<()> {
    let response = client.get_health_check().await?;
    let status = response.status();
    let body = response.text().await?;

    println!("✓ SWC API is up ({})", status);
    if !body.is_empty() {
        println!("{}", body);
    }
    Ok(())
}
