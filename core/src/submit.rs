//! Submission handler.
//!
//! Checks the preconditions, builds the `/fold` payload and hands it to a
//! [`BackendTransport`]. The transport is the only part that differs between
//! the browser and the terminal.
//!
//! ```rust,ignore
//! let submitter = JobSubmitter::new("http://localhost:8080", credentials, transport);
//! let notification = Notification::from_outcome(&submitter.submit(&form.snapshot()).await);
//! ```

use crate::credentials::{AccessToken, CredentialProvider};
use crate::error::{StatusResult, SubmitError, SubmitResult};
use crate::models::{endpoint_url, FoldRequest, JobSubmission};
use crate::status::{parse_runs, PipelineRun};

/// Path of the job submission endpoint.
pub const FOLD_PATH: &str = "/fold";

/// Path of the pipeline listing endpoint.
pub const STATUS_PATH: &str = "/status";

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body on 2xx, the matching [`SubmitError`] otherwise.
    pub fn into_body(self) -> SubmitResult<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(SubmitError::from_status(self.status, self.body))
        }
    }
}

/// Sends requests to the backend.
///
/// Implementations return `Err` only when no response was received
/// (use [`SubmitError::Transport`]); HTTP error statuses come back as a
/// [`HttpReply`]. No `Send` bound, so browser futures qualify.
#[allow(async_fn_in_trait)]
pub trait BackendTransport {
    /// Multipart `POST` of a fold request.
    async fn post_fold(&self, request: &FoldRequest) -> SubmitResult<HttpReply>;

    /// Authorized `GET`.
    async fn get(&self, url: &str, access_token: &AccessToken) -> SubmitResult<HttpReply>;
}

/// Drives a submission against a backend host.
pub struct JobSubmitter<C, T> {
    backend_host: String,
    credentials: C,
    transport: T,
}

impl<C, T> JobSubmitter<C, T>
where
    C: CredentialProvider,
    T: BackendTransport,
{
    pub fn new(backend_host: impl Into<String>, credentials: C, transport: T) -> Self {
        Self {
            backend_host: backend_host.into(),
            credentials,
            transport,
        }
    }

    pub fn backend_host(&self) -> &str {
        &self.backend_host
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the precondition checks and build the request.
    ///
    /// The token is checked before the file.
    pub fn prepare(&self, submission: &JobSubmission) -> SubmitResult<FoldRequest> {
        let access_token = self
            .credentials
            .access_token()
            .ok_or(SubmitError::MissingCredential)?;

        let file = submission.file.clone().ok_or(SubmitError::MissingInput)?;

        Ok(FoldRequest {
            url: endpoint_url(&self.backend_host, FOLD_PATH),
            access_token,
            fields: submission.text_fields(),
            file,
        })
    }

    /// Submit a job. On success returns the response body verbatim.
    pub async fn submit(&self, submission: &JobSubmission) -> SubmitResult<String> {
        let request = match self.prepare(submission) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Fold job not sent: {}", e);
                return Err(e);
            }
        };

        log::info!(
            "📤 Submitting {} ({} bytes) to {}",
            request.file.name,
            request.file.len(),
            request.url
        );

        let reply = self.transport.post_fold(&request).await.map_err(|e| {
            log::error!("Fold request failed: {}", e);
            e
        })?;

        log::debug!("Fold response status: {}", reply.status);
        reply.into_body()
    }

    /// List pipeline runs known to the backend.
    pub async fn list_runs(&self) -> StatusResult<Vec<PipelineRun>> {
        let access_token = self
            .credentials
            .access_token()
            .ok_or(SubmitError::MissingCredential)?;

        let url = endpoint_url(&self.backend_host, STATUS_PATH);
        log::debug!("Fetching pipeline runs from {}", url);

        let body = self.transport.get(&url, &access_token).await?.into_body()?;
        parse_runs(&body)
    }
}
