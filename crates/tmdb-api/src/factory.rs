//! Builds hydrated models from decoded response bodies.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::hydrate::{Hydrate, hydrate};
use crate::model::{Page, PageInfo};

/// Hydrates a fresh `T` from a JSON object.
///
/// # Errors
///
/// - [`Error::Payload`] if `data` is not an object.
/// - [`Error::Hydration`] if a declared field has a mismatched value.
pub fn create<T: Hydrate + Default>(data: &Value) -> Result<T> {
    let object = data.as_object().ok_or(Error::Payload {
        expected: "a JSON object",
    })?;
    let mut model = T::default();
    hydrate(&mut model, object)?;
    Ok(model)
}

/// Hydrates every object of a collection.
///
/// Accepts a JSON array, or an object holding the array under `results`.
///
/// # Errors
///
/// - [`Error::Payload`] if no array is found or an item is not an object.
/// - [`Error::Hydration`] if an item has a mismatched value.
pub fn create_collection<T: Hydrate + Default>(data: &Value) -> Result<Vec<T>> {
    match data {
        Value::Array(items) => items.iter().map(create).collect(),
        Value::Object(_) => create_collection_at(data, "results"),
        _ => Err(Error::Payload {
            expected: "a JSON array or an object with a `results` array",
        }),
    }
}

/// Hydrates every object of the array stored under `key`.
///
/// A missing or `null` key yields an empty collection.
///
/// # Errors
///
/// - [`Error::Payload`] if `data` is not an object or `key` is not an array.
/// - [`Error::Hydration`] if an item has a mismatched value.
pub fn create_collection_at<T: Hydrate + Default>(data: &Value, key: &str) -> Result<Vec<T>> {
    let object = data.as_object().ok_or(Error::Payload {
        expected: "a JSON object",
    })?;
    match object.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(create).collect(),
        Some(_) => Err(Error::Payload {
            expected: "an array under the collection key",
        }),
    }
}

/// Hydrates a paged response (`page`, `total_pages`, `total_results`,
/// `results`).
///
/// # Errors
///
/// Same as [`create`] and [`create_collection_at`].
pub fn create_page<T: Hydrate + Default>(data: &Value) -> Result<Page<T>> {
    let info: PageInfo = create(data)?;
    Ok(Page {
        page: info.page,
        total_pages: info.total_pages,
        total_results: info.total_results,
        results: create_collection_at(data, "results")?,
    })
}
