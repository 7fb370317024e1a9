//! SMS relay
//!
//! A webhook that takes a text message from the messaging provider, asks a
//! chat-completion API to answer it and replies in the provider's XML markup.

pub mod completion;
pub mod config;
pub mod error;
pub mod reply;
pub mod routes;

use std::net::SocketAddr;

use log::info;

pub use completion::{
    answer_or_apologize, CompletionService, OpenAiClient, OpenAiConfig, FALLBACK_REPLY,
};
pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use reply::MessagingReply;
pub use routes::{build_router, AppState, IncomingSms};

/// Binds every interface on `port` and serves until ctrl-c.
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("SMS relay listening on {addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
