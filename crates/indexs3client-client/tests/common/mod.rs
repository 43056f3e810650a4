//! In-process stand-ins for Indexd (under `/index`) and the metadata service
//! (under `/mds`).

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use indexs3client_config::ServiceCredential;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const INDEXD_AUTH: &str = "Basic bXIgaGFwcHkgY2F0OndoaXNrZXJz";
pub const MDS_AUTH: &str = "Basic bXIgZnJpZW5kbHkgY2F0OnBhd3M=";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct FakeState {
    pub records: HashMap<String, Value>,
    pub metadata: HashMap<String, Map<String, Value>>,
    pub requests: Vec<Recorded>,
}

impl FakeState {
    pub fn with_blank_record(mut self, guid: &str, rev: &str) -> Self {
        self.records.insert(
            guid.to_string(),
            json!({
                "did": guid,
                "rev": rev,
                "baseid": "base-1",
                "size": null,
                "urls": [],
                "hashes": {}
            }),
        );
        self
    }

    pub fn with_metadata(mut self, guid: &str, entry: Value) -> Self {
        let Value::Object(entry) = entry else {
            panic!("metadata entries are objects");
        };
        self.metadata.insert(guid.to_string(), entry);
        self
    }
}

pub type Shared = Arc<Mutex<FakeState>>;

pub struct FakeServices {
    pub base: String,
    pub state: Shared,
}

impl FakeServices {
    pub async fn spawn(state: FakeState) -> Self {
        let state = Arc::new(Mutex::new(state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let router = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        Self {
            base: format!("http://{addr}"),
            state,
        }
    }

    pub fn indexd(&self) -> ServiceCredential {
        ServiceCredential::new(format!("{}/index/", self.base), "mr happy cat", "whiskers")
    }

    pub fn metadata_service(&self) -> ServiceCredential {
        ServiceCredential::new(format!("{}/mds", self.base), "mr friendly cat", "paws")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }
}

async fn handle(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let path = uri.path().to_string();
    let query: HashMap<String, String> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut state = state.lock().unwrap();
    state.requests.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(String::from),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    if method == Method::PUT {
        let expected = if path.starts_with("/index/") {
            INDEXD_AUTH
        } else {
            MDS_AUTH
        };
        if authorization.as_deref() != Some(expected) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    if let Some(guid) = path.strip_prefix("/index/blank/") {
        if method != Method::PUT {
            return StatusCode::METHOD_NOT_ALLOWED.into_response();
        }
        let Some(record) = state.records.get_mut(guid) else {
            return StatusCode::NOT_FOUND.into_response();
        };
        if query.get("rev").map(String::as_str) != record["rev"].as_str() {
            return StatusCode::CONFLICT.into_response();
        }
        let update: Value = serde_json::from_str(&body).unwrap();
        for key in ["size", "hashes", "urls"] {
            record[key] = update[key].clone();
        }
        let next_rev = format!("{}-next", record["rev"].as_str().unwrap());
        record["rev"] = json!(next_rev);
        let reply = json!({"did": guid, "rev": next_rev, "baseid": record["baseid"].clone()});
        return Json(reply).into_response();
    }

    if let Some(guid) = path.strip_prefix("/index/") {
        return match state.records.get(guid) {
            Some(record) => Json(record.clone()).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        };
    }

    if let Some(guid) = path.strip_prefix("/mds/metadata/") {
        if method == Method::GET {
            return match state.metadata.get(guid) {
                Some(entry) => Json(entry.clone()).into_response(),
                None => StatusCode::NOT_FOUND.into_response(),
            };
        }
        if query.get("merge").map(String::as_str) != Some("true") {
            return StatusCode::BAD_REQUEST.into_response();
        }
        let Value::Object(fields) = serde_json::from_str(&body).unwrap() else {
            return StatusCode::BAD_REQUEST.into_response();
        };
        let entry = state.metadata.entry(guid.to_string()).or_default();
        entry.extend(fields);
        return Json(entry.clone()).into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}
