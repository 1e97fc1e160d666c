//! Response models.
//!
//! Every top-level model implements [`Hydrate`](crate::hydrate::Hydrate)
//! through an explicit field table. Nested values (genres inside a movie,
//! episodes inside a season, ...) are decoded by the owning field's setter.

mod account;
mod common;
mod configuration;
mod credits;
mod movie;
mod page;
mod person;
mod tv;

pub use account::{Account, GuestSession, ListItemStatus, MovieList, RequestToken, Session};
pub use common::{Change, Collection, Company, Department, Genre, Keyword, Review};
pub use configuration::{Configuration, ImagesConfiguration};
pub use credits::{CastMember, Credits, CrewMember};
pub use movie::Movie;
pub use page::{Page, PageInfo};
pub use person::Person;
pub use tv::{Episode, Season, TvShow};
