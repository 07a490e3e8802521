//! # farmgraph - a GraphQL data API for farm operations
//!
//! farmgraph exposes a typed graph of nine record kinds (users, farms, crops,
//! livestock, weather readings, IoT devices, fields, labor records and
//! machinery) through GraphQL queries and mutations. Every `farmId` and
//! `userId` is checked against storage on write; a farm's collections are
//! computed from its children's foreign keys when a query selects them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project (writes .farmgraph.yml)
//! farmgraph init
//!
//! # Create a user and a farm
//! farmgraph query 'mutation { createUser(input: { email: "ana@example.com", displayName: "Ana", role: FARMER }) { userId } }'
//!
//! # Serve the API
//! farmgraph serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`model`]: record types, enums and input shapes
//! - [`storage`]: the storage gateway trait and the in-memory store
//! - [`validation`]: structural and referential input checks
//! - [`resolver`]: per-request relationship resolution
//! - [`dispatch`]: get/list/create/update for every kind
//! - [`graphql`]: schema, resolvers and the HTTP server
//! - [`cli`]: command-line interface definitions

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.farmgraph.yml` files and project discovery.
pub mod config;

pub mod dispatch;

/// Error types and result aliases.
///
/// Defines the `FarmError` enum and the `Result<T>` alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for the farm graph.
pub mod model;

pub mod resolver;

/// Storage gateway and the bundled in-memory store.
pub mod storage;

/// Input validation.
///
/// Checks required fields, finite numbers, identifiers and foreign keys.
pub mod validation;
