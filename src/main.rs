#[tokio::main]
async fn main() -> anyhow::Result<()> {
    haas::bootstrapper::run().await
}
