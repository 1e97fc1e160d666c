//! Movie model.

use serde::{Deserialize, Serialize};

use super::common::{Collection, Company, Genre};
use crate::hydrate::model_fields;

/// Movie (`movie/{id}` and movie list entries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Release date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Release status (e.g. "Released").
    pub status: Option<String>,
    /// Budget in USD.
    pub budget: u64,
    /// Revenue in USD.
    pub revenue: u64,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Adult flag.
    pub adult: bool,
    /// Video flag.
    pub video: bool,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Genre IDs (list entries).
    pub genre_ids: Vec<u32>,
    /// Genres (details).
    pub genres: Vec<Genre>,
    /// Production companies.
    pub production_companies: Vec<Company>,
    /// Collection the movie belongs to.
    pub belongs_to_collection: Option<Collection>,
}

model_fields!(Movie {
    "id" => id,
    "title" => title,
    "original_title" => original_title,
    "original_language" => original_language,
    "overview" => overview,
    "tagline" => tagline,
    "release_date" => release_date,
    "runtime" => runtime,
    "status" => status,
    "budget" => budget,
    "revenue" => revenue,
    "popularity" => popularity,
    "vote_average" => vote_average,
    "vote_count" => vote_count,
    "adult" => adult,
    "video" => video,
    "imdb_id" => imdb_id,
    "homepage" => homepage,
    "poster_path" => poster_path,
    "backdrop_path" => backdrop_path,
    "genre_ids" => genre_ids,
    "genres" => genres,
    "production_companies" => production_companies,
    "belongs_to_collection" => belongs_to_collection,
});

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::factory::create;

    #[test]
    fn test_parse_movie_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_550.json");
        let data: serde_json::Value = serde_json::from_str(json).unwrap();

        // Act
        let movie: Movie = create(&data).unwrap();

        // Assert
        assert_eq!(movie.id, 550);
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.release_date.as_deref(), Some("1999-10-15"));
        assert_eq!(movie.runtime, Some(139));
        assert_eq!(movie.genres[0].name, "Drama");
        assert!(!movie.production_companies.is_empty());
    }

    #[test]
    fn test_null_optional_fields_hydrate_to_none() {
        // Arrange
        let data = serde_json::json!({"id": 1, "tagline": null, "belongs_to_collection": null});

        // Act
        let movie: Movie = create(&data).unwrap();

        // Assert
        assert_eq!(movie.tagline, None);
        assert_eq!(movie.belongs_to_collection, None);
    }
}
