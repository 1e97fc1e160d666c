//! `tv` resource, covering shows, seasons and episodes.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create, create_page};
use crate::model::{Episode, Page, Season, TvShow};
use crate::query::QueryParameters;

/// TV shows with their seasons and episodes.
///
/// The `tv`, `tvseasons` and `tvepisodes` resource names all resolve here.
#[derive(Debug, Clone, Copy)]
pub struct TvApi<'a> {
    client: &'a Client,
}

impl<'a> TvApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET tv/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_tvshow(&self, id: u64, params: &QueryParameters) -> Result<TvShow> {
        let data = self.client.get_json(&format!("tv/{id}"), params).await?;
        create(&data)
    }

    /// `GET tv/{tv_id}/season/{season_number}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(tv_id = tv_id, season = season_number))]
    pub async fn get_season(
        &self,
        tv_id: u64,
        season_number: u32,
        params: &QueryParameters,
    ) -> Result<Season> {
        let data = self
            .client
            .get_json(&format!("tv/{tv_id}/season/{season_number}"), params)
            .await?;
        create(&data)
    }

    /// `GET tv/{tv_id}/season/{season_number}/episode/{episode_number}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(
        skip_all,
        fields(tv_id = tv_id, season = season_number, episode = episode_number)
    )]
    pub async fn get_episode(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        params: &QueryParameters,
    ) -> Result<Episode> {
        let path = format!("tv/{tv_id}/season/{season_number}/episode/{episode_number}");
        let data = self.client.get_json(&path, params).await?;
        let mut episode: Episode = create(&data)?;
        episode.show_id.get_or_insert(tv_id);
        Ok(episode)
    }

    /// `GET tv/popular`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_popular(&self, params: &QueryParameters) -> Result<Page<TvShow>> {
        let data = self.client.get_json("tv/popular", params).await?;
        create_page(&data)
    }

    /// `GET tv/top_rated`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_top_rated(&self, params: &QueryParameters) -> Result<Page<TvShow>> {
        let data = self.client.get_json("tv/top_rated", params).await?;
        create_page(&data)
    }
}
