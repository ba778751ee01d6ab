//! OAuth token grants against `/auth/token`
//!
//! Handles the two token endpoint interactions:
//! 1. Authorization code exchange (initial flow completion)
//! 2. Token refresh
//!
//! Both POST a form-encoded grant body, per the OAuth2 token-endpoint
//! convention; the endpoint does not accept JSON-encoded grant bodies.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::AUTH_TOKEN_PATH;
use crate::error::{Error, Result};

/// Response from the token endpoint for both grants.
///
/// `expires_in` is a delta in seconds from the response time; the crate
/// does not track expiry, so the caller decides when to refresh. Every
/// field defaults when absent from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessToken {
    /// Opaque bearer credential; transmit unmodified
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    /// Seconds until the access token expires (delta, not absolute)
    pub expires_in: u64,
    /// Not-valid-before marker. The API does not document the unit
    /// (epoch seconds vs. offset); treat as opaque server data.
    #[serde(rename = "notBefore")]
    pub not_before: i64,
    pub issuer: String,
    #[serde(rename = "encodedToken")]
    pub encoded_token: String,
}

/// Form body for the `authorization_code` grant.
#[derive(Debug, Serialize)]
pub struct AuthorizationCodeBody<'a> {
    pub grant_type: &'static str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// Form body for the `refresh_token` grant.
#[derive(Debug, Serialize)]
pub struct RefreshTokenBody<'a> {
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
}

impl Client {
    /// Exchange a one-time authorization code for an access token.
    ///
    /// `redirect_uri` must exactly match the URI used during the
    /// authorization redirect, or the server rejects the grant.
    pub async fn exchange_authorization_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken> {
        let body = AuthorizationCodeBody {
            grant_type: "authorization_code",
            code,
            redirect_uri,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
        };

        let raw = self
            .execute(self.http.post(self.url(AUTH_TOKEN_PATH)).form(&body))
            .await?;

        serde_json::from_str(&raw).map_err(|e| Error::Decode(format!("invalid token response: {e}")))
    }

    /// Obtain a fresh access token from a previously issued refresh token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<AccessToken> {
        let body = RefreshTokenBody {
            grant_type: "refresh_token",
            refresh_token,
        };

        let raw = self
            .execute(self.http.post(self.url(AUTH_TOKEN_PATH)).form(&body))
            .await?;

        serde_json::from_str(&raw)
            .map_err(|e| Error::Decode(format!("invalid refresh response: {e}")))
    }
}
