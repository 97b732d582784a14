#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Delegate to the framework entry point.
    toolgun::run_with_config().await
}
