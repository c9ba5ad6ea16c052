#[tokio::main]
async fn main() {
    if let Err(e) = movers_booking::run().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
