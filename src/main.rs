use std::error::Error;

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file; running without one is fine.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    telemetry::init()?;

    tracing::info!(target: "faq_bot", "starting FAQ chatbot backend");

    api::start().await?;

    Ok(())
}
