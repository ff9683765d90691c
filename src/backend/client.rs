// client.rs
use crate::backend::models::{Ad, AdEdit, Category, Country, NewAd, User};
use crate::backend::{ApiError, Backend, Credentials};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, COOKIE, SET_COOKIE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("classifieds-web/", env!("CARGO_PKG_VERSION"));

/// REST client for the classifieds backend.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // `Url::join` replaces the last segment unless the base ends with '/'.
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Network(format!("bad endpoint {path}: {e}")))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        creds: &Credentials,
    ) -> Result<RequestBuilder, ApiError> {
        let mut builder = self
            .client
            .request(method, self.url(path)?)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref());

        if let Some(cookie) = creds.cookie() {
            builder = builder.header(COOKIE, cookie);
        }

        Ok(builder)
    }

    fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "backend returned an error");
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, creds: &Credentials) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path, creds)?)?;
        let body = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }

    fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        creds: &Credentials,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.execute(self.request(method, path, creds)?.json(body))
    }
}

impl Backend for HttpBackend {
    fn current_user(&self, creds: &Credentials) -> Result<User, ApiError> {
        self.get_json("/users/me", creds)
    }

    fn public_ads(&self, creds: &Credentials) -> Result<Vec<Ad>, ApiError> {
        self.get_json("/ads/public", creds)
    }

    fn my_ads(&self, creds: &Credentials) -> Result<Vec<Ad>, ApiError> {
        self.get_json("/ads/my", creds)
    }

    fn my_ad(&self, creds: &Credentials, id: i64) -> Result<Ad, ApiError> {
        self.get_json(&format!("/ads/my/{id}"), creds)
    }

    fn create_ad(&self, creds: &Credentials, ad: &NewAd) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/ads", creds, ad).map(drop)
    }

    fn update_ad(&self, creds: &Credentials, id: i64, edit: &AdEdit) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, &format!("/ads/{id}"), creds, edit)
            .map(drop)
    }

    fn categories(&self, creds: &Credentials) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories", creds)
    }

    fn countries(&self, creds: &Credentials) -> Result<Vec<Country>, ApiError> {
        self.get_json("/locations/countries", creds)
    }

    fn logout(&self, creds: &Credentials) -> Result<Vec<String>, ApiError> {
        let response = self.execute(self.request(Method::POST, "/auth/logout", creds)?)?;

        Ok(response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect())
    }
}
