//! HTTP transport to the folding backend, built on `gloo-net`.

use foldrun_core::{fields, AccessToken, BackendTransport, FoldRequest, HttpReply, SubmitError, SubmitResult};
use gloo_net::http::{Request, Response};
use web_sys::{Blob, FormData};

/// Browser transport. The browser sets the multipart boundary itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

/// Build the multipart body: five text parts, then the file.
fn build_form_data(request: &FoldRequest) -> SubmitResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| SubmitError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    for (name, value) in &request.fields {
        form_data
            .append_with_str(name, value)
            .map_err(|e| SubmitError::Transport(format!("Failed to append {}: {:?}", name, e)))?;
    }

    let bytes = js_sys::Uint8Array::from(request.file.content.as_slice());
    let blob = Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&bytes))
        .map_err(|e| SubmitError::Transport(format!("Failed to create Blob: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(fields::FILE, &blob, &request.file.name)
        .map_err(|e| SubmitError::Transport(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}

async fn read_reply(response: Response) -> SubmitResult<HttpReply> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(format!("Failed to read response: {}", e)))?;
    Ok(HttpReply::new(status, body))
}

impl BackendTransport for GlooTransport {
    async fn post_fold(&self, request: &FoldRequest) -> SubmitResult<HttpReply> {
        let form_data = build_form_data(request)?;

        let response = Request::post(&request.url)
            .header("Authorization", &request.authorization())
            .body(form_data)
            .map_err(|e| SubmitError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        read_reply(response).await
    }

    async fn get(&self, url: &str, access_token: &AccessToken) -> SubmitResult<HttpReply> {
        let response = Request::get(url)
            .header("Authorization", &access_token.bearer())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        read_reply(response).await
    }
}
