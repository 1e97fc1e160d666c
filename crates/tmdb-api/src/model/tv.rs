//! TV show, season and episode models.

use serde::{Deserialize, Serialize};

use super::common::Genre;
use crate::hydrate::model_fields;

/// TV show (`tv/{id}` and TV list entries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvShow {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Last air date.
    pub last_air_date: Option<String>,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Season summaries.
    pub seasons: Vec<Season>,
    /// Status (e.g. "Returning Series", "Ended").
    pub status: Option<String>,
    /// Whether the show is still in production.
    pub in_production: bool,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genre IDs (list entries).
    pub genre_ids: Vec<u32>,
    /// Genres (details).
    pub genres: Vec<Genre>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

model_fields!(TvShow {
    "id" => id,
    "name" => name,
    "original_name" => original_name,
    "original_language" => original_language,
    "origin_country" => origin_country,
    "overview" => overview,
    "first_air_date" => first_air_date,
    "last_air_date" => last_air_date,
    "number_of_episodes" => number_of_episodes,
    "number_of_seasons" => number_of_seasons,
    "seasons" => seasons,
    "status" => status,
    "in_production" => in_production,
    "popularity" => popularity,
    "vote_average" => vote_average,
    "vote_count" => vote_count,
    "genre_ids" => genre_ids,
    "genres" => genres,
    "poster_path" => poster_path,
    "backdrop_path" => backdrop_path,
});

/// Season (`tv/{id}/season/{n}` or a summary inside a show).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Season name.
    pub name: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Number of episodes (summaries only).
    pub episode_count: u32,
    /// Episodes (details only).
    pub episodes: Vec<Episode>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
}

model_fields!(Season {
    "id" => id,
    "season_number" => season_number,
    "name" => name,
    "overview" => overview,
    "air_date" => air_date,
    "episode_count" => episode_count,
    "episodes" => episodes,
    "poster_path" => poster_path,
    "vote_average" => vote_average,
});

/// Episode (`tv/{id}/season/{n}/episode/{m}` or an entry inside a season).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Episode name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Parent show ID.
    pub show_id: Option<u64>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Episode type (e.g. "standard", "finale").
    pub episode_type: Option<String>,
}

model_fields!(Episode {
    "id" => id,
    "episode_number" => episode_number,
    "season_number" => season_number,
    "name" => name,
    "overview" => overview,
    "air_date" => air_date,
    "show_id" => show_id,
    "runtime" => runtime,
    "still_path" => still_path,
    "vote_average" => vote_average,
    "vote_count" => vote_count,
    "episode_type" => episode_type,
});

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::factory::create;

    #[test]
    fn test_parse_tv_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/tv_1399.json");
        let data: serde_json::Value = serde_json::from_str(json).unwrap();

        // Act
        let show: TvShow = create(&data).unwrap();

        // Assert
        assert_eq!(show.id, 1399);
        assert_eq!(show.name, "Game of Thrones");
        assert_eq!(show.number_of_seasons, 8);
        assert_eq!(show.seasons.len(), 2);
        assert_eq!(show.seasons[1].episode_count, 10);
    }

    #[test]
    fn test_season_ignores_internal_id() {
        // Arrange
        let data = serde_json::json!({
            "_id": "5256c89f19c2956ff6046d47",
            "id": 3624,
            "season_number": 1,
            "episodes": [{"id": 63056, "episode_number": 1, "name": "Winter Is Coming"}]
        });

        // Act
        let season: Season = create(&data).unwrap();

        // Assert
        assert_eq!(season.id, 3624);
        assert_eq!(season.episodes[0].name, "Winter Is Coming");
    }
}
