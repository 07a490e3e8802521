//! GraphQL surface of the farm graph.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! farmgraph serve --port 4000
//!
//! # Execute a query from the CLI
//! farmgraph query '{ getFarms { farmId name crops { cropId type } } }'
//!
//! # Print the SDL
//! farmgraph schema
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getX`, `getXs`, `getXsByFarmId` per kind, plus
//!   `getUser`, `getUsers`, `getFarm`, `getFarms`, `getFarmsByUserId`
//! - **Mutations**: `createX`, `updateX` per kind
//!
//! Every request runs with its own [`ResolutionScope`], attached by
//! [`FarmApi::execute`].

mod errors;
mod relations;
mod schema;
mod server;

pub use errors::ResultExt;
pub use schema::{FarmSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};

use async_graphql::{Context, Request, Response};
use std::sync::Arc;

use crate::resolver::ResolutionScope;
use crate::storage::Storage;

/// The schema bound to one store.
#[derive(Clone)]
pub struct FarmApi {
    schema: FarmSchema,
    store: Arc<dyn Storage>,
}

impl FarmApi {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            schema: build_schema(),
            store,
        }
    }

    /// Execute one operation in a fresh resolution scope.
    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        let scope = ResolutionScope::new(self.store.clone());
        self.schema.execute(request.into().data(scope)).await
    }

    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }
}

pub(crate) fn scope<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a ResolutionScope> {
    ctx.data::<ResolutionScope>()
}
