//! `Client` - shared token, transport and options behind every resource.

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

use crate::api::{
    AccountApi, AuthenticationApi, ChangesApi, CollectionsApi, CompaniesApi, ConfigurationApi,
    DiscoverApi, GenresApi, JobsApi, KeywordsApi, ListsApi, MoviesApi, PeopleApi, ResourceHandle,
    ResourceKind, ReviewsApi, SearchApi, TvApi,
};
use crate::error::{Error, Result};
use crate::http::{
    AcceptJsonHeader, ApiTokenPlugin, AuthScheme, DEFAULT_BASE_URL, DEFAULT_MIN_INTERVAL,
    HttpClient,
};
use crate::options::ClientOptions;
use crate::query::QueryParameters;
use crate::token::ApiToken;

/// Default User-Agent sent by the client.
const DEFAULT_USER_AGENT: &str = concat!("tmdb-api/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Owns the API token, the HTTP transport and the option store. Resource
/// wrappers borrow the client, so every wrapper shares one transport and
/// one token.
#[derive(Debug)]
pub struct Client {
    /// API token attached to every request.
    token: ApiToken,
    /// How the token is attached.
    auth_scheme: AuthScheme,
    /// HTTP transport.
    http: HttpClient,
    /// Declared client options.
    options: ClientOptions,
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct ClientBuilder {
    token: Option<ApiToken>,
    auth_scheme: AuthScheme,
    base_url: Option<Url>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: impl Into<ApiToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets how the token is attached (default: `api_key` query parameter).
    #[must_use]
    pub const fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `tmdb-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Uses a preconfigured `reqwest::Client`; `user_agent` is then ignored.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - [`Error::Builder`] if no token is set.
    /// - [`Error::Url`] if the default base URL fails to parse.
    /// - [`Error::Http`] if the `reqwest::Client` build fails.
    pub fn build(self) -> Result<Client> {
        let token = self
            .token
            .ok_or_else(|| Error::Builder(String::from("api token is required")))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let inner = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .gzip(true)
                .build()?,
        };

        let http = HttpClient::new(
            inner,
            base_url,
            self.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL),
        );

        let mut client = Client {
            token,
            auth_scheme: self.auth_scheme,
            http,
            options: ClientOptions::default(),
        };
        client.install_plugins();
        Ok(client)
    }
}

impl Client {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(token: impl Into<ApiToken>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Returns the handle for a resource name such as `"movies"`.
    ///
    /// `tv`, `tvseasons` and `tvepisodes` all resolve to the TV wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] for an unknown name.
    pub fn api(&self, name: &str) -> Result<ResourceHandle<'_>> {
        let kind: ResourceKind = name.parse()?;
        Ok(self.resolve(kind))
    }

    /// Binds the wrapper for `kind` to this client.
    #[must_use]
    pub const fn resolve(&self, kind: ResourceKind) -> ResourceHandle<'_> {
        match kind {
            ResourceKind::Configuration => ResourceHandle::Configuration(self.configuration()),
            ResourceKind::Authentication => ResourceHandle::Authentication(self.authentication()),
            ResourceKind::Account => ResourceHandle::Account(self.account()),
            ResourceKind::Movies => ResourceHandle::Movies(self.movies()),
            ResourceKind::Collections => ResourceHandle::Collections(self.collections()),
            ResourceKind::Tv => ResourceHandle::Tv(self.tv()),
            ResourceKind::People => ResourceHandle::People(self.people()),
            ResourceKind::Lists => ResourceHandle::Lists(self.lists()),
            ResourceKind::Companies => ResourceHandle::Companies(self.companies()),
            ResourceKind::Genres => ResourceHandle::Genres(self.genres()),
            ResourceKind::Keywords => ResourceHandle::Keywords(self.keywords()),
            ResourceKind::Discover => ResourceHandle::Discover(self.discover()),
            ResourceKind::Search => ResourceHandle::Search(self.search()),
            ResourceKind::Reviews => ResourceHandle::Reviews(self.reviews()),
            ResourceKind::Changes => ResourceHandle::Changes(self.changes()),
            ResourceKind::Jobs => ResourceHandle::Jobs(self.jobs()),
        }
    }

    /// `configuration` resource.
    #[must_use]
    pub const fn configuration(&self) -> ConfigurationApi<'_> {
        ConfigurationApi::new(self)
    }

    /// `authentication` resource.
    #[must_use]
    pub const fn authentication(&self) -> AuthenticationApi<'_> {
        AuthenticationApi::new(self)
    }

    /// `account` resource.
    #[must_use]
    pub const fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// `movies` resource.
    #[must_use]
    pub const fn movies(&self) -> MoviesApi<'_> {
        MoviesApi::new(self)
    }

    /// `collections` resource.
    #[must_use]
    pub const fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi::new(self)
    }

    /// `tv` resource, including seasons and episodes.
    #[must_use]
    pub const fn tv(&self) -> TvApi<'_> {
        TvApi::new(self)
    }

    /// `people` resource.
    #[must_use]
    pub const fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    /// `lists` resource.
    #[must_use]
    pub const fn lists(&self) -> ListsApi<'_> {
        ListsApi::new(self)
    }

    /// `companies` resource.
    #[must_use]
    pub const fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    /// `genres` resource.
    #[must_use]
    pub const fn genres(&self) -> GenresApi<'_> {
        GenresApi::new(self)
    }

    /// `keywords` resource.
    #[must_use]
    pub const fn keywords(&self) -> KeywordsApi<'_> {
        KeywordsApi::new(self)
    }

    /// `discover` resource.
    #[must_use]
    pub const fn discover(&self) -> DiscoverApi<'_> {
        DiscoverApi::new(self)
    }

    /// `search` resource.
    #[must_use]
    pub const fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// `reviews` resource.
    #[must_use]
    pub const fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi::new(self)
    }

    /// `changes` resource.
    #[must_use]
    pub const fn changes(&self) -> ChangesApi<'_> {
        ChangesApi::new(self)
    }

    /// `jobs` resource.
    #[must_use]
    pub const fn jobs(&self) -> JobsApi<'_> {
        JobsApi::new(self)
    }

    /// API token attached to every request.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Replaces the API token on the client and on the transport.
    pub fn set_token(&mut self, token: impl Into<ApiToken>) -> &mut Self {
        self.token = token.into();
        self.http
            .add_plugin(ApiTokenPlugin::new(self.token.clone(), self.auth_scheme));
        self
    }

    /// How the token is attached.
    #[must_use]
    pub const fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }

    /// HTTP transport shared by every resource.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Replaces the transport and installs the token and JSON plugins on it.
    pub fn set_http_client(&mut self, http: HttpClient) -> &mut Self {
        self.http = http;
        self.install_plugins();
        self
    }

    /// Merges `headers` into the headers sent with every request.
    pub fn set_headers(&mut self, headers: HeaderMap) -> &mut Self {
        self.http.set_headers(headers);
        self
    }

    /// Removes every extra header.
    pub fn clear_headers(&mut self) -> &mut Self {
        self.http.clear_headers();
        self
    }

    /// Reads a declared option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedOption`] for an undeclared name.
    pub fn get_option(&self, name: &str) -> Result<&Value> {
        self.options.get(name)
    }

    /// Writes a declared option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedOption`] for an undeclared name.
    pub fn set_option(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.options.set(name, value)?;
        Ok(self)
    }

    /// Every declared option with its current value.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// GET `path` with normalized `params`.
    pub(crate) async fn get_json(&self, path: &str, params: &QueryParameters) -> Result<Value> {
        self.http.get(path, &params.to_pairs()).await
    }

    /// POST `body` to `path`.
    pub(crate) async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.http.post(path, &[], body).await
    }

    fn install_plugins(&mut self) {
        self.http
            .add_plugin(ApiTokenPlugin::new(self.token.clone(), self.auth_scheme));
        self.http.add_plugin(AcceptJsonHeader);
    }
}
