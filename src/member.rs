//! Current-member account fetch via `GET /me`
//!
//! `MemberAccount` is a read-only projection of the authenticated member's
//! profile. Every field is optional on the wire: absent fields decode to
//! their default value rather than failing the call.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::ME_PATH;
use crate::error::{Error, Result};

/// Account-level view returned by `/me`, wrapping the member profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberAccount {
    pub member: Member,
    pub hide_ads: bool,
    pub show_custom_posters_ads: bool,
    pub can_have_custom_posters: bool,
}

/// The member profile: identity, display metadata, avatar, links, bio.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub short_name: String,
    pub pronoun: Pronoun,
    pub avatar: Avatar,
    pub member_status: String,
    pub hide_ads_in_content: bool,
    pub account_status: String,
    pub hide_ads: bool,
    pub bio_lbml: String,
    /// Server-defined film summaries. The schema is variable and not
    /// validated here; consumers inspect the raw JSON values.
    pub favorite_films: Vec<serde_json::Value>,
    pub links: Vec<MemberLink>,
    pub private_watchlist: bool,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pronoun {
    pub id: String,
    pub label: String,
    pub subject_pronoun: String,
    pub object_pronoun: String,
    pub possessive_adjective: String,
    pub possessive_pronoun: String,
    pub reflexive: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Avatar {
    pub sizes: Vec<ImageSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    pub url: String,
}

/// External profile link (website, social account).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MemberLink {
    #[serde(rename = "type")]
    pub link_type: String,
    pub id: String,
    pub url: String,
}

impl Client {
    /// Fetch the account of the member the bearer token belongs to.
    ///
    /// The token is opaque: no local format or expiry validation. An
    /// invalid or expired token surfaces as the server's non-200 answer.
    pub async fn get_current_member(&self, access_token: &str) -> Result<MemberAccount> {
        let raw = self
            .execute(self.http.get(self.url(ME_PATH)).bearer_auth(access_token))
            .await?;

        serde_json::from_str(&raw)
            .map_err(|e| Error::Decode(format!("invalid member response: {e}")))
    }
}
