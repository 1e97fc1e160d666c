//! Cast and crew credits.

use serde::{Deserialize, Serialize};

use crate::hydrate::model_fields;

/// Credits of a movie or TV show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    /// Movie or show ID.
    pub id: u64,
    /// Cast, in billing order.
    pub cast: Vec<CastMember>,
    /// Crew.
    pub crew: Vec<CrewMember>,
}

model_fields!(Credits {
    "id" => id,
    "cast" => cast,
    "crew" => crew,
});

/// Cast credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    pub character: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Billing order.
    pub order: u32,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    pub popularity: f64,
}

model_fields!(CastMember {
    "id" => id,
    "name" => name,
    "character" => character,
    "credit_id" => credit_id,
    "order" => order,
    "profile_path" => profile_path,
    "popularity" => popularity,
});

/// Crew credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Job title.
    pub job: String,
    /// Department.
    pub department: String,
    /// Credit ID.
    pub credit_id: String,
    /// Profile image path.
    pub profile_path: Option<String>,
}

model_fields!(CrewMember {
    "id" => id,
    "name" => name,
    "job" => job,
    "department" => department,
    "credit_id" => credit_id,
    "profile_path" => profile_path,
});
