#[tokio::main]
async fn main() -> anyhow::Result<()> {
    words_daily_server::run().await
}
