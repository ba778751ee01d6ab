//! Letterboxd API constants
//!
//! Endpoint paths are relative to the base URL so tests and staging
//! deployments can point a client elsewhere. The OAuth client ID and
//! secret are caller-supplied, never baked in.

use std::time::Duration;

/// Production API base URL
pub const API_BASE_URL: &str = "https://api.letterboxd.com/api/v0";

/// Token endpoint path for both the authorization-code and refresh grants
pub const AUTH_TOKEN_PATH: &str = "/auth/token";

/// Current-member endpoint path
pub const ME_PATH: &str = "/me";

/// Client-side timeout applied when no override is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
