//! API configuration model (`configuration`).

use serde::{Deserialize, Serialize};

use crate::hydrate::model_fields;

/// API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Image URL settings.
    pub images: ImagesConfiguration,
    /// Keys reported by the change endpoints.
    pub change_keys: Vec<String>,
}

model_fields!(Configuration {
    "images" => images,
    "change_keys" => change_keys,
});

/// Image URL settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfiguration {
    /// Plain HTTP image base URL.
    pub base_url: String,
    /// HTTPS image base URL.
    pub secure_base_url: String,
    /// Backdrop sizes.
    pub backdrop_sizes: Vec<String>,
    /// Logo sizes.
    pub logo_sizes: Vec<String>,
    /// Poster sizes.
    pub poster_sizes: Vec<String>,
    /// Profile sizes.
    pub profile_sizes: Vec<String>,
    /// Still sizes.
    pub still_sizes: Vec<String>,
}

model_fields!(ImagesConfiguration {
    "base_url" => base_url,
    "secure_base_url" => secure_base_url,
    "backdrop_sizes" => backdrop_sizes,
    "logo_sizes" => logo_sizes,
    "poster_sizes" => poster_sizes,
    "profile_sizes" => profile_sizes,
    "still_sizes" => still_sizes,
});

impl ImagesConfiguration {
    /// Builds the full HTTPS URL of an image at the given size.
    ///
    /// Returns `None` if `size` is not offered for any image type.
    #[must_use]
    pub fn image_url(&self, size: &str, file_path: &str) -> Option<String> {
        let offered = [
            &self.backdrop_sizes,
            &self.logo_sizes,
            &self.poster_sizes,
            &self.profile_sizes,
            &self.still_sizes,
        ]
        .iter()
        .any(|sizes| sizes.iter().any(|s| s == size));
        offered.then(|| format!("{}{size}{file_path}", self.secure_base_url))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::factory::create;

    #[test]
    fn test_parse_configuration_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/configuration.json");
        let data: serde_json::Value = serde_json::from_str(json).unwrap();

        // Act
        let config: Configuration = create(&data).unwrap();

        // Assert
        assert_eq!(config.images.secure_base_url, "https://image.tmdb.org/t/p/");
        assert!(config.images.poster_sizes.contains(&String::from("w500")));
    }

    #[test]
    fn test_image_url_for_offered_size() {
        // Arrange
        let images = ImagesConfiguration {
            secure_base_url: String::from("https://image.tmdb.org/t/p/"),
            poster_sizes: vec![String::from("w500")],
            ..ImagesConfiguration::default()
        };

        // Act
        let url = images.image_url("w500", "/poster.jpg");

        // Assert
        assert_eq!(
            url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(images.image_url("w9999", "/poster.jpg"), None);
    }
}
