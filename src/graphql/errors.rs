use async_graphql::{Error, ErrorExtensions};

use crate::error::FarmError;

/// Every error surfaced through GraphQL carries `extensions.code`, plus the
/// offending `field`, `kind` and `id` where the error knows them.
impl ErrorExtensions for FarmError {
    fn extend(&self) -> Error {
        if matches!(self.code(), "STORAGE_ERROR" | "CONFIG_ERROR") {
            tracing::error!(error = %self, "Request failed");
        }

        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                FarmError::Validation { field, .. } => {
                    e.set("field", field.as_str());
                }
                FarmError::ReferenceNotFound { kind, field, id } => {
                    e.set("field", *field);
                    e.set("kind", kind.name());
                    e.set("id", id.as_str());
                }
                FarmError::NotFound { kind, id } => {
                    e.set("kind", kind.name());
                    e.set("id", id.as_str());
                }
                FarmError::DanglingReference { from, field, id } => {
                    e.set("field", *field);
                    e.set("kind", from.name());
                    e.set("id", id.as_str());
                }
                _ => {}
            }
        })
    }
}

/// Converts crate results into GraphQL results without losing the extensions.
///
/// A bare `?` would go through async-graphql's blanket `From<Display>` and
/// drop the code, so resolvers call `.extended()` instead.
pub trait ResultExt<T> {
    fn extended(self) -> async_graphql::Result<T>;
}

impl<T> ResultExt<T> for crate::error::Result<T> {
    fn extended(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
