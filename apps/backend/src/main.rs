#[tokio::main]
async fn main() -> anyhow::Result<()> {
    geoquiz_backend::run().await
}
