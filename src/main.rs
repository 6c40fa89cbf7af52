#[tokio::main]
async fn main() -> std::io::Result<()> {
    media_lake::run_with_config().await
}
