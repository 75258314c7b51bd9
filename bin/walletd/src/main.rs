#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    walletd::run().await
}
