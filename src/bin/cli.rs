use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    age_insight::cli::run().await
}
