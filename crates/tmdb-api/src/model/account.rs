//! Account, session and list models.

use serde::{Deserialize, Serialize};

use super::movie::Movie;
use crate::hydrate::model_fields;

/// Account details (`account`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Account ID.
    pub id: u64,
    /// Display name.
    pub name: Option<String>,
    /// Username.
    pub username: String,
    /// Whether adult content is included.
    pub include_adult: bool,
    /// Language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Country (ISO 3166-1).
    pub iso_3166_1: Option<String>,
}

model_fields!(Account {
    "id" => id,
    "name" => name,
    "username" => username,
    "include_adult" => include_adult,
    "iso_639_1" => iso_639_1,
    "iso_3166_1" => iso_3166_1,
});

/// Request token (`authentication/token/new`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestToken {
    /// Whether the call succeeded.
    pub success: bool,
    /// Expiry timestamp.
    pub expires_at: Option<String>,
    /// Token to be approved by the user.
    pub request_token: String,
}

model_fields!(RequestToken {
    "success" => success,
    "expires_at" => expires_at,
    "request_token" => request_token,
});

/// User session (`authentication/session/new`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Whether the call succeeded.
    pub success: bool,
    /// Session ID.
    pub session_id: String,
}

model_fields!(Session {
    "success" => success,
    "session_id" => session_id,
});

/// Guest session (`authentication/guest_session/new`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestSession {
    /// Whether the call succeeded.
    pub success: bool,
    /// Guest session ID.
    pub guest_session_id: String,
    /// Expiry timestamp.
    pub expires_at: Option<String>,
}

model_fields!(GuestSession {
    "success" => success,
    "guest_session_id" => guest_session_id,
    "expires_at" => expires_at,
});

/// User-created movie list (`list/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieList {
    /// List ID.
    pub id: String,
    /// List name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Creator's username.
    pub created_by: Option<String>,
    /// Number of users who favorited the list.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Items.
    pub items: Vec<Movie>,
}

model_fields!(MovieList {
    "id" => id,
    "name" => name,
    "description" => description,
    "created_by" => created_by,
    "favorite_count" => favorite_count,
    "item_count" => item_count,
    "iso_639_1" => iso_639_1,
    "poster_path" => poster_path,
    "items" => items,
});

/// Whether a movie is on a list (`list/{id}/item_status`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemStatus {
    /// List ID.
    pub id: Option<String>,
    /// Whether the item is present.
    pub item_present: bool,
}

model_fields!(ListItemStatus {
    "id" => id,
    "item_present" => item_present,
});
