//! Authenticators for the Global Catalog API.
//!
//! An [Authenticator] is installed as a request hook on the API client
//! and adds the `Authorization` header to every request.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use base64::prelude::{Engine, BASE64_STANDARD};
use futures::future::BoxFuture;
use global_catalog_api_v1::RequestHook;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::GlobalCatalogError;

/// Default URL of the IAM token service.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Fraction of a token's lifetime after which it is refreshed.
const IAM_REFRESH_FRACTION: f64 = 0.8;

/// How requests to the API are authenticated.
#[derive(Clone, Default)]
pub enum Authenticator {
    /// Send requests without credentials.
    #[default]
    NoAuth,
    /// HTTP basic authentication.
    Basic { username: String, password: String },
    /// A bearer token managed by the caller.
    BearerToken(String),
    /// Exchange an API key for access tokens with the IAM token service.
    Iam(Arc<IamAuthenticator>),
}

impl Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authenticator::NoAuth => write!(f, "NoAuth"),
            Authenticator::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Authenticator::BearerToken(_) => write!(f, "BearerToken(..)"),
            Authenticator::Iam(iam) => f.debug_tuple("Iam").field(iam).finish(),
        }
    }
}

/// Credentials must be set and may not be wrapped in braces or quotes,
/// which is a common mistake when copying them from templates.
fn check_credential(name: &str, value: &str) -> Result<(), GlobalCatalogError> {
    if value.is_empty() {
        return Err(GlobalCatalogError::Config(format!("{name} must not be empty")));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) && value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(GlobalCatalogError::Config(format!(
            "{name} must not be wrapped in braces or quotes"
        )));
    }
    Ok(())
}

impl Authenticator {
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, GlobalCatalogError> {
        let authenticator = Authenticator::Basic {
            username: username.into(),
            password: password.into(),
        };
        authenticator.validate()?;
        Ok(authenticator)
    }

    pub fn bearer_token(token: impl Into<String>) -> Result<Self, GlobalCatalogError> {
        let authenticator = Authenticator::BearerToken(token.into());
        authenticator.validate()?;
        Ok(authenticator)
    }

    /// Authenticate with an API key against the default IAM token service.
    pub fn iam(apikey: impl Into<String>) -> Result<Self, GlobalCatalogError> {
        IamAuthenticator::builder(apikey).build().map(Self::from)
    }

    /// Name of the authentication scheme, as used by the `AUTH_TYPE` property.
    pub fn auth_type(&self) -> &'static str {
        match self {
            Authenticator::NoAuth => "noauth",
            Authenticator::Basic { .. } => "basic",
            Authenticator::BearerToken(_) => "bearerToken",
            Authenticator::Iam(_) => "iam",
        }
    }

    pub fn validate(&self) -> Result<(), GlobalCatalogError> {
        match self {
            Authenticator::NoAuth => Ok(()),
            Authenticator::Basic { username, password } => {
                check_credential("username", username)?;
                check_credential("password", password)
            },
            Authenticator::BearerToken(token) => check_credential("bearer token", token),
            Authenticator::Iam(iam) => iam.validate(),
        }
    }

    /// The value of the `Authorization` header, if any.
    pub async fn authorization(&self) -> Result<Option<String>, GlobalCatalogError> {
        match self {
            Authenticator::NoAuth => Ok(None),
            Authenticator::Basic { username, password } => {
                let credentials = BASE64_STANDARD.encode(format!("{username}:{password}"));
                Ok(Some(format!("Basic {credentials}")))
            },
            Authenticator::BearerToken(token) => Ok(Some(format!("Bearer {token}"))),
            Authenticator::Iam(iam) => {
                let token = iam.access_token().await?;
                Ok(Some(format!("Bearer {token}")))
            },
        }
    }
}

impl From<IamAuthenticator> for Authenticator {
    fn from(iam: IamAuthenticator) -> Self {
        Authenticator::Iam(Arc::new(iam))
    }
}

impl RequestHook for Authenticator {
    fn on_request<'a>(
        &'a self,
        request: &'a mut reqwest::Request,
    ) -> BoxFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let Some(authorization) = self.authorization().await.map_err(|e| e.to_string())?
            else {
                return Ok(());
            };
            let mut value = HeaderValue::from_str(&authorization).map_err(|e| e.to_string())?;
            value.set_sensitive(true);
            request.headers_mut().insert(AUTHORIZATION, value);
            Ok(())
        })
    }
}

/// Response of the IAM token service.
#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    /// Lifetime of the token in seconds.
    expires_in: i64,
    /// Expiration of the token in seconds since the epoch.
    expiration: i64,
}

#[derive(Debug, Clone)]
struct IamToken {
    access_token: String,
    refresh_at: i64,
}

impl From<IamTokenResponse> for IamToken {
    fn from(response: IamTokenResponse) -> Self {
        let remaining = (response.expires_in as f64 * (1.0 - IAM_REFRESH_FRACTION)) as i64;
        IamToken {
            access_token: response.access_token,
            refresh_at: response.expiration - remaining,
        }
    }
}

/// Exchanges an API key for IAM access tokens and caches them.
///
/// A token is reused until 80% of its lifetime has passed.
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    http: reqwest::Client,
    token: Mutex<Option<IamToken>>,
}

impl Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Builder for an [IamAuthenticator].
#[derive(Clone)]
pub struct IamAuthenticatorBuilder {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    disable_ssl_verification: bool,
}

impl IamAuthenticatorBuilder {
    /// Use a different IAM token service, e.g. a staging environment.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Authenticate to the token service with a client id and secret.
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    pub fn build(self) -> Result<IamAuthenticator, GlobalCatalogError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(60))
            .danger_accept_invalid_certs(self.disable_ssl_verification)
            .build()
            .map_err(|e| GlobalCatalogError::Other(e.to_string()))?;
        let iam = IamAuthenticator {
            apikey: self.apikey,
            url: self.url.trim_end_matches('/').to_string(),
            client_id: self.client_id,
            client_secret: self.client_secret,
            http,
            token: Mutex::new(None),
        };
        iam.validate()?;
        Ok(iam)
    }
}

impl IamAuthenticator {
    pub fn builder(apikey: impl Into<String>) -> IamAuthenticatorBuilder {
        IamAuthenticatorBuilder {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            disable_ssl_verification: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn validate(&self) -> Result<(), GlobalCatalogError> {
        check_credential("apikey", &self.apikey)?;
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(GlobalCatalogError::Config(
                "client_id and client_secret must be set together".to_string(),
            ));
        }
        Ok(())
    }

    /// Return a cached access token, requesting a new one when the cached
    /// token is due for refresh.
    pub async fn access_token(&self) -> Result<String, GlobalCatalogError> {
        let mut token = self.token.lock().await;
        let now = chrono::Utc::now().timestamp();
        if let Some(cached) = token.as_ref() {
            if now < cached.refresh_at {
                return Ok(cached.access_token.clone());
            }
        }

        debug!(url = %self.url, "requesting IAM access token");
        let fresh = IamToken::from(self.request_token().await?);
        let access_token = fresh.access_token.clone();
        *token = Some(fresh);
        Ok(access_token)
    }

    async fn request_token(&self) -> Result<IamTokenResponse, GlobalCatalogError> {
        let form = [
            ("grant_type", IAM_GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", "cloud_iam"),
        ];
        let request = self
            .http
            .post(format!("{}/identity/token", self.url))
            .header(ACCEPT, "application/json")
            .form(&form);
        let request = match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => request.basic_auth(id, Some(secret)),
            _ => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| GlobalCatalogError::Auth(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GlobalCatalogError::Auth(format!(
                "token request failed with {status}: {body}"
            )));
        }
        response
            .json::<IamTokenResponse>()
            .await
            .map_err(|e| GlobalCatalogError::Auth(format!("invalid token response: {e}")))
    }
}
