#[tokio::main]
async fn main() {
    if let Err(e) = salon_booking::run().await {
        eprintln!("salon-booking failed to start: {}", e);
        std::process::exit(1);
    }
}
