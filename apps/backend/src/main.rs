#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wordpet_backend::run().await
}
