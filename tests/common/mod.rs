#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use guess_tally::config::Credentials;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request as seen by the fake search API.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct ApiState {
    statuses: Arc<Vec<Value>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    fail_with: Option<StatusCode>,
}

pub struct FakeApi {
    pub base: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeApi {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        consumer_key: "consumer-key".to_string(),
        consumer_secret: "consumer-secret".to_string(),
        access_token: "access-token".to_string(),
        access_token_secret: "access-token-secret".to_string(),
    }
}

/// A status object shaped like the search API's extended-mode output.
pub fn status(id: u64, in_reply_to: Option<u64>, screen_name: &str, text: &str) -> Value {
    json!({
        "id": id,
        "id_str": id.to_string(),
        "full_text": text,
        "in_reply_to_status_id": in_reply_to,
        "user": { "screen_name": screen_name },
    })
}

async fn search(
    State(state): State<ApiState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push(SeenRequest {
        params: params.clone(),
        authorization,
    });

    if let Some(code) = state.fail_with {
        return Err(code);
    }

    let count: usize = params
        .get("count")
        .and_then(|c| c.parse().ok())
        .unwrap_or(15);
    let max_id: Option<u64> = params.get("max_id").and_then(|m| m.parse().ok());

    let mut page: Vec<Value> = state
        .statuses
        .iter()
        .filter(|s| max_id.map_or(true, |max| s["id"].as_u64().unwrap() <= max))
        .cloned()
        .collect();
    page.sort_by_key(|s| std::cmp::Reverse(s["id"].as_u64().unwrap()));
    page.truncate(count);

    Ok(Json(json!({
        "statuses": page,
        "search_metadata": { "count": count },
    })))
}

async fn serve(state: ApiState) -> FakeApi {
    let seen = state.seen.clone();
    let app = Router::new()
        .route("/1.1/search/tweets.json", get(search))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeApi {
        base: format!("http://{}", addr),
        seen,
    }
}

/// Start a fake search API serving `statuses`, newest first.
pub async fn spawn(statuses: Vec<Value>) -> FakeApi {
    serve(ApiState {
        statuses: Arc::new(statuses),
        seen: Arc::new(Mutex::new(Vec::new())),
        fail_with: None,
    })
    .await
}

/// Start a fake search API that answers every request with `code`.
pub async fn spawn_failing(code: StatusCode) -> FakeApi {
    serve(ApiState {
        statuses: Arc::new(Vec::new()),
        seen: Arc::new(Mutex::new(Vec::new())),
        fail_with: Some(code),
    })
    .await
}
