#![allow(dead_code)]

use async_trait::async_trait;
use postcraft_client::{MultipartPayload, Transport, TransportResponse};
use postcraft_error::{HttpError, HttpErrorKind};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use url::Url;

/// A request the scripted transport received.
#[derive(Debug, Clone)]
pub enum Recorded {
    Multipart { url: Url, payload: MultipartPayload },
    Json { url: Url, body: serde_json::Value },
}

/// In-memory transport returning canned replies in order.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, HttpError>>>,
    requests: Mutex<Vec<Recorded>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<TransportResponse, HttpError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    /// Each request waits for [`Self::release`] before answering.
    pub fn gated(replies: Vec<Result<TransportResponse, HttpError>>) -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new(replies)
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    async fn answer(&self, request: Recorded) -> Result<TransportResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::new(HttpErrorKind::Request("no reply scripted".into()))))
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_multipart(
        &self,
        url: &Url,
        payload: MultipartPayload,
    ) -> Result<TransportResponse, HttpError> {
        self.answer(Recorded::Multipart {
            url: url.clone(),
            payload,
        })
        .await
    }

    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, HttpError> {
        self.answer(Recorded::Json {
            url: url.clone(),
            body: body.clone(),
        })
        .await
    }
}

pub fn ok(status: u16) -> Result<TransportResponse, HttpError> {
    Ok(TransportResponse::new(status, Vec::new()))
}

pub fn ok_json(status: u16, body: serde_json::Value) -> Result<TransportResponse, HttpError> {
    Ok(TransportResponse::new(status, body.to_string()))
}

pub fn network_error() -> Result<TransportResponse, HttpError> {
    Err(HttpError::new(HttpErrorKind::Request("connection refused".into())))
}
