//! Letterboxd API client library
//!
//! Thin client over the Letterboxd REST API: OAuth2 token grants and the
//! authenticated member's account. Every call is one HTTP round-trip with
//! no retries or caching — transient-failure policy stays with the caller.
//!
//! Call flow:
//! 1. Construct a [`Client`] with OAuth client credentials
//! 2. Complete the consent redirect out of band, then trade the code via
//!    [`Client::exchange_authorization_code`]
//! 3. Call authenticated endpoints such as [`Client::get_current_member`]
//!    with the bearer token
//! 4. When the token ages out, use [`Client::refresh_access_token`]

pub mod client;
pub mod constants;
pub mod error;
pub mod member;
pub mod token;

pub use client::{Client, ClientBuilder};
pub use constants::API_BASE_URL;
pub use error::{Error, OAuthError, Result};
pub use member::{Avatar, ImageSize, Member, MemberAccount, MemberLink, Pronoun};
pub use token::{AccessToken, AuthorizationCodeBody, RefreshTokenBody};
