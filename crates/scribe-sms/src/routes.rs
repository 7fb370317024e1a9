use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    routing::{get, post},
    Form, Json, Router,
};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::completion::{answer_or_apologize, CompletionService};
use crate::reply::MessagingReply;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionService>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }
}

/// Form fields posted by the messaging provider. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct IncomingSms {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/sms", post(sms_reply))
        .route("/health", get(health))
        .with_state(state)
}

/// Always answers with the reply envelope; an unreadable form counts as an
/// empty message.
async fn sms_reply(
    State(state): State<AppState>,
    form: Result<Form<IncomingSms>, FormRejection>,
) -> MessagingReply {
    let sms = match form {
        Ok(Form(sms)) => sms,
        Err(rejection) => {
            warn!("Unreadable SMS webhook form: {rejection}");
            IncomingSms::default()
        }
    };
    let question = sms.body.trim();
    info!("Received SMS from {}: {}", sms.from, question);

    let answer = answer_or_apologize(state.completion.as_ref(), question).await;
    info!("Replying: {answer}");

    MessagingReply::new(answer)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "sms-qa-app" }))
}
