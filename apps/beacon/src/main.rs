#[tokio::main]
async fn main() {
    if let Err(err) = beacon::server::run().await {
        tracing::error!(?err, "server exited with error");
        std::process::exit(1);
    }
}
