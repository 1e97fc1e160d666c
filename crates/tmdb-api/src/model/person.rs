//! Person model.

use serde::{Deserialize, Serialize};

use crate::hydrate::model_fields;

/// Person (`person/{id}` and people list entries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Alternative names.
    pub also_known_as: Vec<String>,
    /// Biography.
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD).
    pub birthday: Option<String>,
    /// Day of death (YYYY-MM-DD).
    pub deathday: Option<String>,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: u8,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Adult flag.
    pub adult: bool,
}

model_fields!(Person {
    "id" => id,
    "name" => name,
    "also_known_as" => also_known_as,
    "biography" => biography,
    "birthday" => birthday,
    "deathday" => deathday,
    "gender" => gender,
    "homepage" => homepage,
    "imdb_id" => imdb_id,
    "known_for_department" => known_for_department,
    "place_of_birth" => place_of_birth,
    "popularity" => popularity,
    "profile_path" => profile_path,
    "adult" => adult,
});
