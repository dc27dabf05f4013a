//! HTTP transport seam.

use crate::{MultipartPayload, PartBody};
use async_trait::async_trait;
use postcraft_error::{HttpError, HttpErrorKind};
use reqwest::multipart::{Form, Part as ReqwestPart};
use tracing::{debug, error, instrument};
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct TransportResponse {
    /// HTTP status code
    status: u16,
    /// Raw response body
    body: Vec<u8>,
}

impl TransportResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`HttpErrorKind::Status`] unless the status is 2xx.
    #[track_caller]
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HttpError::new(HttpErrorKind::Status(self.status)))
        }
    }
}

/// Issues the two kinds of request the composer makes.
///
/// Implementations make exactly one attempt per call and apply no timeout
/// beyond their own defaults. Any status code is returned as a response;
/// only failures to obtain a response are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a multipart form.
    async fn post_multipart(
        &self,
        url: &Url,
        payload: MultipartPayload,
    ) -> Result<TransportResponse, HttpError>;

    /// POST a JSON document.
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, HttpError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn read(response: reqwest::Response) -> Result<TransportResponse, HttpError> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            HttpError::new(HttpErrorKind::Body(e.to_string()))
        })?;
        debug!(status, bytes = body.len(), "Received response");
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

fn to_form(payload: MultipartPayload) -> Result<Form, HttpError> {
    payload
        .into_parts()
        .into_iter()
        .try_fold(Form::new(), |form, part| {
            let (name, body) = part.into_inner();
            match body {
                PartBody::Text(value) => Ok(form.text(name, value)),
                PartBody::File {
                    file_name,
                    mime,
                    data,
                } => {
                    let file = ReqwestPart::bytes(data)
                        .file_name(file_name)
                        .mime_str(&mime)
                        .map_err(|e| HttpError::new(HttpErrorKind::Payload(e.to_string())))?;
                    Ok(form.part(name, file))
                }
            }
        })
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, payload), fields(url = %url, parts = payload.parts().len()))]
    async fn post_multipart(
        &self,
        url: &Url,
        payload: MultipartPayload,
    ) -> Result<TransportResponse, HttpError> {
        let form = to_form(payload)?;

        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                HttpError::new(HttpErrorKind::Request(e.to_string()))
            })?;

        Self::read(response).await
    }

    #[instrument(skip(self, body), fields(url = %url))]
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, HttpError> {
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                HttpError::new(HttpErrorKind::Request(e.to_string()))
            })?;

        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Part;

    #[test]
    fn status_ranges() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(301, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn error_for_status_carries_code() {
        let err = TransportResponse::new(404, "").error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn invalid_part_mime_is_a_payload_error() {
        let mut payload = MultipartPayload::default();
        payload.push(Part::file("image_0", "a.jpg", "not a mime", vec![1]));

        let err = to_form(payload).unwrap_err();
        assert!(matches!(err.kind, HttpErrorKind::Payload(_)));
    }

    #[test]
    fn valid_parts_build_a_form() {
        let mut payload = MultipartPayload::default();
        payload.push(Part::text("postTitle", "Launch"));
        payload.push(Part::file("image_0", "a.jpg", "image/jpeg", vec![1, 2]));
        assert!(to_form(payload).is_ok());
    }
}
