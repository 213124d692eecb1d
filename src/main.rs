use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cloudmon::start().await
}
