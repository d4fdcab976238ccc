//! Fetches a customer's identity review and prints it.
//!
//! Usage: `review_customer <customer-id>`. Credentials come from the
//! `STRADDLE_*` environment variables (or `.env`).

use anyhow::Context;
use straddle_client::model::{Model, Validate};
use straddle_client::obs::init_tracing;
use straddle_client::StraddleClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let customer_id = std::env::args()
        .nth(1)
        .context("usage: review_customer <customer-id>")?;

    let client = StraddleClient::from_env()?;
    let response = client
        .customers()
        .review(&customer_id)
        .await
        .with_context(|| format!("fetching review for customer {}", customer_id))?;

    if let Err(err) = response.validate() {
        tracing::warn!("Review payload did not validate: {}", err);
    }

    let review = response
        .data()
        .context("review response carried no data")?;
    println!("{}", serde_json::to_string_pretty(&review.to_json())?);

    Ok(())
}
