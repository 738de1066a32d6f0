#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod handlers;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    bootstrap::run().await;
}
