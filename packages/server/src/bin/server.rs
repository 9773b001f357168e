//! Single-room WebSocket chat server.
//!
//! Serves the chat client from the document root and relays chat, alias and
//! presence updates between every connection on the chat path.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lobby-server -- --port 9002 --document-root ./public
//! ```

use clap::Parser;
use lobby_server::ServerArgs;
use lobby_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = lobby_server::run(args.to_config()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
