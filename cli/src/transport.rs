//! `reqwest` implementation of [`BackendTransport`].

use std::time::Duration;

use foldrun_core::{AccessToken, BackendTransport, FoldRequest, HttpReply, SubmitError, SubmitResult};
use reqwest::multipart::{Form, Part};

use crate::error::CliResult;

/// HTTP transport for native builds.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport. Without a timeout, reqwest's defaults apply.
    pub fn new(timeout: Option<Duration>) -> CliResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }

    async fn read_reply(response: reqwest::Response) -> SubmitResult<HttpReply> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(HttpReply::new(status, body))
    }
}

/// Multipart body: the five text parts, then the file.
fn build_form(request: &FoldRequest) -> Form {
    let form = request
        .fields
        .iter()
        .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()));

    let file = Part::bytes(request.file.content.clone()).file_name(request.file.name.clone());
    form.part(foldrun_core::fields::FILE, file)
}

impl BackendTransport for ReqwestTransport {
    async fn post_fold(&self, request: &FoldRequest) -> SubmitResult<HttpReply> {
        let response = self
            .client
            .post(&request.url)
            .bearer_auth(request.access_token.as_str())
            .multipart(build_form(request))
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        log::debug!("POST {} -> {}", request.url, response.status());
        Self::read_reply(response).await
    }

    async fn get(&self, url: &str, access_token: &AccessToken) -> SubmitResult<HttpReply> {
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        log::debug!("GET {} -> {}", url, response.status());
        Self::read_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Multipart, State},
        http::{header, HeaderMap, StatusCode},
        routing::{get, post},
        Router,
    };
    use foldrun_core::{
        FastaFile, JobSubmission, JobSubmitter, Notification, ProteinType, Severity, StaticCredentials, Toggle,
    };
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    /// What the fake backend saw for one `/fold` call.
    #[derive(Debug, Clone)]
    struct ReceivedFold {
        authorization: Option<String>,
        content_type: Option<String>,
        parts: Vec<(String, Option<String>, Vec<u8>)>,
    }

    impl ReceivedFold {
        fn text(&self, name: &str) -> Option<String> {
            self.parts
                .iter()
                .find(|(n, _, _)| n == name)
                .map(|(_, _, bytes)| String::from_utf8_lossy(bytes).to_string())
        }
    }

    #[derive(Clone, Default)]
    struct Recorded(Arc<Mutex<Vec<ReceivedFold>>>);

    fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    async fn fold(
        State(recorded): State<Recorded>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> (StatusCode, String) {
        let mut parts = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            parts.push((name, file_name, bytes));
        }

        let received = ReceivedFold {
            authorization: header_value(&headers, header::AUTHORIZATION),
            content_type: header_value(&headers, header::CONTENT_TYPE),
            parts,
        };
        let authorized = received.authorization.as_deref() == Some("Bearer good-token");
        recorded.0.lock().unwrap().push(received);

        if authorized {
            (StatusCode::OK, "job started".to_string())
        } else {
            (StatusCode::UNAUTHORIZED, "{'status':'Unauthorized'}".to_string())
        }
    }

    async fn status() -> &'static str {
        r#"[{"experiment_id":"amylase-fold-12","sequence":"protein","status":"RUNNING","duration":0,"url_link":"u","user":"ada_lovelace"}]"#
    }

    async fn spawn_backend(recorded: Recorded) -> SocketAddr {
        let app = Router::new()
            .route("/fold", post(fold))
            .route("/status", get(status))
            .with_state(recorded);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn submission() -> JobSubmission {
        JobSubmission {
            experiment_id: "amylase-fold-12".into(),
            file: Some(FastaFile::new("protein.fasta", ">A\nMKTAYIAKQR\n")),
            small_bfd: Some(Toggle::Yes),
            protein_type: Some(ProteinType::Multimer),
            relaxation: Some(Toggle::No),
            prediction_count: "5".into(),
        }
    }

    fn submitter(addr: SocketAddr, token: &str) -> JobSubmitter<StaticCredentials, ReqwestTransport> {
        JobSubmitter::new(
            format!("http://{}", addr),
            StaticCredentials::new(AccessToken::new(token)),
            ReqwestTransport::new(Some(Duration::from_secs(10))).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_posts_multipart_with_all_fields() {
        let recorded = Recorded::default();
        let addr = spawn_backend(recorded.clone()).await;

        let outcome = submitter(addr, "good-token").submit(&submission()).await;
        assert_eq!(Notification::from_outcome(&outcome), Notification::success("job started"));

        let calls = recorded.0.lock().unwrap();
        assert_eq!(calls.len(), 1);

        let call = &calls[0];
        assert_eq!(call.authorization.as_deref(), Some("Bearer good-token"));
        assert!(call
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("multipart/form-data"));

        let names: Vec<_> = call.parts.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["experimentId", "smallBFD", "relaxation", "proteinType", "predictionCount", "file"]
        );
        assert_eq!(call.text("experimentId").as_deref(), Some("amylase-fold-12"));
        assert_eq!(call.text("proteinType").as_deref(), Some("multimer"));
        assert_eq!(call.text("predictionCount").as_deref(), Some("5"));

        let (_, file_name, bytes) = &call.parts[5];
        assert_eq!(file_name.as_deref(), Some("protein.fasta"));
        assert_eq!(bytes.as_slice(), b">A\nMKTAYIAKQR\n");
    }

    #[tokio::test]
    async fn test_rejected_token_is_an_error_notification() {
        let addr = spawn_backend(Recorded::default()).await;

        let outcome = submitter(addr, "stale-token").submit(&submission()).await;
        let notification = Notification::from_outcome(&outcome);
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, "Access token was rejected by the backend");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = submitter(addr, "good-token").submit(&submission()).await;
        assert!(matches!(outcome, Err(SubmitError::Transport(_))));
    }

    #[tokio::test]
    async fn test_list_runs() {
        let addr = spawn_backend(Recorded::default()).await;

        let runs = submitter(addr, "good-token").list_runs().await.unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].experiment_id, "amylase-fold-12");
        assert_eq!(runs[0].duration, None);
    }
}
