#[tokio::main]
async fn main() {
    downtown_guide::run().await;
}
