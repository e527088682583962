use crate::error::{Error, Result};
use serde::Deserialize;

const UPLOAD_URL_ENV: &str = "VSL_UPLOAD_URL";
const UPLOAD_TOKEN_ENV: &str = "VSL_UPLOAD_TOKEN";

/// Pre-authorized handle to the drive endpoint, acquired once per session
/// from the environment and released on drop at session end.
pub struct UploadSession {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

impl UploadSession {
    pub fn acquire() -> Result<Self> {
        let endpoint = std::env::var(UPLOAD_URL_ENV).map_err(|_| {
            Error::custom(format!("Falta {UPLOAD_URL_ENV}: no hay destino de subida"))
        })?;
        let token = std::env::var(UPLOAD_TOKEN_ENV).map_err(|_| {
            Error::custom(format!(
                "Falta {UPLOAD_TOKEN_ENV}: la sesión de subida no está autorizada"
            ))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            token,
        })
    }

    /// Uploads one artifact's bytes and returns the retrievable URL the
    /// service answers with.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("filename", filename)])
            .bearer_auth(&self.token)
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        let parsed: UploadResponse = response.json().await?;
        Ok(parsed.url)
    }
}

#[cfg(test)]
mod tests {
    use super::UploadResponse;

    #[test]
    fn response_parses_url() {
        let parsed: UploadResponse =
            serde_json::from_str(r#"{"url":"https://drive.example/d/abc123"}"#).expect("json");
        assert_eq!(parsed.url, "https://drive.example/d/abc123");
    }
}
