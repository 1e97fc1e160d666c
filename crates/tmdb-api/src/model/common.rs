//! Small shared models: genres, keywords, companies, collections, reviews.

use serde::{Deserialize, Serialize};

use super::movie::Movie;
use crate::hydrate::model_fields;

/// Genre entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

model_fields!(Genre {
    "id" => id,
    "name" => name,
});

/// Keyword entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

model_fields!(Keyword {
    "id" => id,
    "name" => name,
});

/// Production company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Headquarters location.
    pub headquarters: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1).
    pub origin_country: Option<String>,
}

model_fields!(Company {
    "id" => id,
    "name" => name,
    "description" => description,
    "headquarters" => headquarters,
    "homepage" => homepage,
    "logo_path" => logo_path,
    "origin_country" => origin_country,
});

/// Movie collection (franchise).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Movies in the collection.
    pub parts: Vec<Movie>,
}

model_fields!(Collection {
    "id" => id,
    "name" => name,
    "overview" => overview,
    "poster_path" => poster_path,
    "backdrop_path" => backdrop_path,
    "parts" => parts,
});

/// User review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Review ID.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Review text.
    pub content: String,
    /// Review URL.
    pub url: Option<String>,
    /// Language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Reviewed media ID.
    pub media_id: Option<u64>,
    /// Reviewed media title.
    pub media_title: Option<String>,
    /// Reviewed media type ("movie" or "tv").
    pub media_type: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

model_fields!(Review {
    "id" => id,
    "author" => author,
    "content" => content,
    "url" => url,
    "iso_639_1" => iso_639_1,
    "media_id" => media_id,
    "media_title" => media_title,
    "media_type" => media_type,
    "created_at" => created_at,
});

/// Department and the jobs it contains (`job/list`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    /// Department name.
    pub department: String,
    /// Job titles.
    pub jobs: Vec<String>,
}

model_fields!(Department {
    "department" => department,
    "jobs" => jobs,
});

/// Changed item ID (`movie/changes`, `tv/changes`, `person/changes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Change {
    /// Changed item ID.
    pub id: u64,
    /// Adult flag (absent for some item types).
    pub adult: Option<bool>,
}

model_fields!(Change {
    "id" => id,
    "adult" => adult,
});
