//! Declarative hydration of models from decoded JSON objects.
//!
//! Each model declares a static table pairing JSON keys with setter
//! functions. [`hydrate`] applies the entries whose key is present in the
//! data and skips everything else, so a name without a setter cannot exist.

mod naming;

use std::fmt;

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};

pub use naming::{camelize, uncamelize};

/// Setter applied to a model for one declared field.
pub type Setter<T> = fn(&mut T, Value) -> serde_json::Result<()>;

/// A declared model field paired with its setter.
pub struct Field<T> {
    /// JSON key (snake_case).
    pub name: &'static str,
    /// Setter for the key.
    pub apply: Setter<T>,
}

impl<T> Field<T> {
    /// Pairs a key with its setter.
    #[must_use]
    pub const fn new(name: &'static str, apply: Setter<T>) -> Self {
        Self { name, apply }
    }

    /// Conventional accessor name of the field, e.g. `setReleaseDate`.
    #[must_use]
    pub fn accessor(&self) -> String {
        camelize(&format!("set_{}", self.name))
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// A model that can be populated from a flat JSON object.
pub trait Hydrate: Sized + 'static {
    /// Model name used in diagnostics.
    const MODEL: &'static str;

    /// Declared fields.
    const FIELDS: &'static [Field<Self>];

    /// Looks up a declared field by JSON key.
    #[must_use]
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }

    /// Returns `true` if `name` is a declared field.
    #[must_use]
    fn declares(name: &str) -> bool {
        Self::field(name).is_some()
    }
}

/// Applies every declared field present in `data` to `target`.
///
/// Keys the model does not declare are skipped. Returns `target` for
/// chaining.
///
/// # Errors
///
/// Returns [`Error::Hydration`] when a declared field's value does not fit
/// the field type.
pub fn hydrate<'a, T: Hydrate>(target: &'a mut T, data: &Map<String, Value>) -> Result<&'a mut T> {
    for (key, value) in data {
        let Some(field) = T::field(key) else {
            trace!(model = T::MODEL, key = %key, "skipping undeclared field");
            continue;
        };

        (field.apply)(target, value.clone()).map_err(|source| Error::Hydration {
            model: T::MODEL,
            field: key.clone(),
            accessor: field.accessor(),
            source,
        })?;
    }

    Ok(target)
}

/// Implements [`Hydrate`] for a model from a `"json_key" => field` table.
///
/// Each setter deserializes the JSON value into the field's type.
macro_rules! model_fields {
    ($model:ident { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::hydrate::Hydrate for $model {
            const MODEL: &'static str = stringify!($model);

            const FIELDS: &'static [$crate::hydrate::Field<Self>] = &[
                $(
                    $crate::hydrate::Field::new($name, |model: &mut $model, value| {
                        model.$field = serde_json::from_value(value)?;
                        Ok(())
                    }),
                )*
            ];
        }
    };
}

pub(crate) use model_fields;
