//! ApiClient - bearer-authenticated access to the REST backend

use auth::LoginResponse;
use reqwest::Url;
use shared::{DashboardConfig, PdmsError, Result, Session};
use std::time::Duration;

/// HTTP client bound to the backend base URL.
///
/// Requests made with a logged-in session carry its bearer token; the
/// client adds nothing for a logged-out session and lets the backend
/// reject the call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| PdmsError::Config(format!("invalid API base URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PdmsError::Http(e.to_string()))?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PdmsError::Config(format!("invalid request path '{}': {}", path, e)))
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        match session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// POST `/auth/login` with form-urlencoded credentials
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.url("/auth/login")?;
        tracing::debug!(%url, "posting login form");

        let form = [("username", username), ("password", password)];
        let response = self
            .http
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| PdmsError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PdmsError::Http(format!(
                "login failed: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| PdmsError::Http(format!("malformed login response: {}", e)))
    }

    /// GET a JSON resource
    pub async fn get_json(&self, path: &str, session: &Session) -> Result<serde_json::Value> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .authorized(self.http.get(url), session)
            .send()
            .await
            .map_err(|e| PdmsError::Http(e.to_string()))?;
        Self::json_body(response).await
    }

    /// POST a JSON body
    pub async fn post_json(
        &self,
        path: &str,
        session: &Session,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");

        let response = self
            .authorized(self.http.post(url), session)
            .json(body)
            .send()
            .await
            .map_err(|e| PdmsError::Http(e.to_string()))?;
        Self::json_body(response).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str, session: &Session) -> Result<()> {
        let url = self.url(path)?;
        tracing::debug!(%url, "DELETE");

        let response = self
            .authorized(self.http.delete(url), session)
            .send()
            .await
            .map_err(|e| PdmsError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PdmsError::Http(format!("HTTP {}", response.status())));
        }
        Ok(())
    }

    async fn json_body(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(PdmsError::Http(format!("HTTP {}", status)));
        }
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| PdmsError::Http(format!("malformed response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = DashboardConfig {
            api_base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(ApiClient::new(&config), Err(PdmsError::Config(_))));
    }

    #[test]
    fn test_accepts_valid_base_url() {
        let config = DashboardConfig::default();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8000/");
    }
}
