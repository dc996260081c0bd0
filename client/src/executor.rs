//! Async host for the `printful-core` build/parse pair.
//!
//! `Executor` owns the one piece of I/O in the crate: it takes a `Call`,
//! asks the core client for the `HttpRequest`, sends it exactly once over
//! `reqwest`, and hands the raw response back to the core for
//! normalization. No retries, no caching, no rate limiting.

use printful_core::{Call, HttpMethod, HttpRequest, HttpResponse, Normalized, PrintfulClient};
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;

use crate::{Config, Error};

#[derive(Debug, Clone)]
pub struct Executor {
    http: reqwest::Client,
    core: PrintfulClient,
}

impl Executor {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let core = PrintfulClient::with_base_url(config.base_url.as_str(), config.token.as_deref());
        // Reject tokens that cannot travel in a header before the first call.
        HeaderValue::from_str(&core.authorization())?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            core,
        })
    }

    /// Client with a caller-supplied `reqwest::Client`, e.g. one with a
    /// proxy or custom TLS roots.
    pub fn with_http_client(config: &Config, http: reqwest::Client) -> Result<Self, Error> {
        let core = PrintfulClient::with_base_url(config.base_url.as_str(), config.token.as_deref());
        HeaderValue::from_str(&core.authorization())?;
        Ok(Self { http, core })
    }

    pub fn core(&self) -> &PrintfulClient {
        &self.core
    }

    #[tracing::instrument(level = "debug", skip_all, fields(route = call.route.name))]
    pub async fn execute(&self, call: Call) -> Result<Normalized, Error> {
        let request = self.core.build(&call)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.send(request).await?;
        tracing::debug!(status = response.status, "received response");

        let normalized = self.core.parse(&call, response)?;
        if normalized.is_error() {
            tracing::warn!(code = normalized.code, error = %normalized.error, "remote reported failure");
        }
        Ok(normalized)
    }

    /// `execute`, then deserialize into the route's typed result.
    pub async fn fetch<T: DeserializeOwned>(&self, call: Call) -> Result<T, Error> {
        Ok(self.execute(call).await?.into_typed()?)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
