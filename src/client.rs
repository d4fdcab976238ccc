use crate::circuit_breaker::{create_api_circuit_breaker, ApiCircuitBreaker};
use crate::config::ClientConfig;
use crate::errors::{ApiErrorDetail, ClientError};
use crate::model::Model;
use crate::services::{
    BridgeService, ChargesService, CustomersService, FundingEventsService, PaykeysService,
    PaymentsService, PayoutsService,
};
use failsafe::futures::CircuitBreaker;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Async client for the Straddle API.
///
/// Cloning is cheap: clones share the connection pool and the circuit
/// breaker. Resource calls go through the service accessors
/// ([`customers`](Self::customers), [`charges`](Self::charges), ...).
#[derive(Clone)]
pub struct StraddleClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Arc<str>,
    account_id: Option<Arc<str>>,
    breaker: ApiCircuitBreaker,
}

impl StraddleClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::Config("api key cannot be empty".to_string()));
        }

        let base_url = Url::parse(config.resolved_base_url())
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                ClientError::Config(format!("invalid base URL: {}", config.resolved_base_url()))
            })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("straddle-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            api_key: Arc::from(config.api_key.as_str()),
            account_id: config.account_id.as_deref().map(Arc::from),
            breaker: create_api_circuit_breaker(),
        })
    }

    /// Builds a client from `STRADDLE_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ClientConfig::from_env().map_err(|e| ClientError::Config(format!("{:#}", e)))?;
        Self::new(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn customers(&self) -> CustomersService<'_> {
        CustomersService::new(self)
    }

    pub fn paykeys(&self) -> PaykeysService<'_> {
        PaykeysService::new(self)
    }

    pub fn bridge(&self) -> BridgeService<'_> {
        BridgeService::new(self)
    }

    pub fn charges(&self) -> ChargesService<'_> {
        ChargesService::new(self)
    }

    pub fn payouts(&self) -> PayoutsService<'_> {
        PayoutsService::new(self)
    }

    pub fn payments(&self) -> PaymentsService<'_> {
        PaymentsService::new(self)
    }

    pub fn funding_events(&self) -> FundingEventsService<'_> {
        FundingEventsService::new(self)
    }

    /// Sends a request without a body.
    pub(crate) async fn call<T: Model>(&self, method: Method, path: &[&str]) -> Result<T, ClientError> {
        self.execute(self.request(method, path)).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &[&str], query: &Q) -> Result<T, ClientError>
    where
        T: Model,
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &[&str],
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: Model,
        B: Model,
    {
        self.execute(self.request(method, path).json(body.raw()))
            .await
    }

    /// Starts a request to `path`, given as unescaped segments.
    fn request(&self, method: Method, path: &[&str]) -> RequestBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        let is_post = method == Method::POST;

        let mut builder = self
            .http
            .request(method, url)
            .bearer_auth(&*self.api_key)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(account_id) = &self.account_id {
            builder = builder.header("Straddle-Account-Id", &**account_id);
        }
        if is_post {
            builder = builder.header("Idempotency-Key", uuid::Uuid::new_v4().to_string());
        }
        builder
    }

    async fn execute<T: Model>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::info!("{} {}", method, path);
        tracing::debug!(
            account_id = self.account_id.as_deref().unwrap_or("-"),
            "Authorization: Bearer {}",
            redact(&self.api_key)
        );

        let attempt = exchange(&self.http, request);
        let body = match self.breaker.call_with(counts_as_outage, attempt).await {
            Ok(body) => body,
            Err(failsafe::Error::Inner(err)) => {
                match err.status() {
                    Some(status) if status < 500 => {
                        tracing::warn!("{} {} rejected: {}", method, path, err)
                    }
                    _ => tracing::error!("{} {} failed: {}", method, path, err),
                }
                return Err(err);
            }
            Err(failsafe::Error::Rejected) => {
                tracing::warn!("{} {} not sent, circuit breaker open", method, path);
                return Err(ClientError::CircuitOpen);
            }
        };

        let value: Value = serde_json::from_slice(&body)?;
        Ok(T::from_json(value)?)
    }
}

async fn exchange(http: &reqwest::Client, request: reqwest::Request) -> Result<Vec<u8>, ClientError> {
    let response = http.execute(request).await?;
    let status = response.status();
    let body = response.bytes().await?;
    if status.is_success() {
        Ok(body.to_vec())
    } else {
        Err(api_error(status, &body))
    }
}

/// Transport errors and 5xx responses trip the breaker; 4xx answers do not.
fn counts_as_outage(err: &ClientError) -> bool {
    match err {
        ClientError::Http(_) => true,
        other => other.status().is_some_and(|status| status >= 500),
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").cloned())
        .filter(Value::is_object)
        .map(|error| {
            let text = |key: &str| error.get(key).and_then(Value::as_str).map(str::to_string);
            ApiErrorDetail {
                error_type: text("type"),
                title: text("title"),
                detail: text("detail"),
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        detail,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

fn redact(secret: &str) -> String {
    let tail = secret.len().saturating_sub(4);
    format!("***{}", secret.get(tail..).unwrap_or_default())
}
