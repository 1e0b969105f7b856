//! Adapter pipeline for repackaging a prerendered web-app build into a
//! Liquid storefront theme.
//!
//! The pipeline is sequential and rebuilt from filesystem state on every
//! run: scan the built client tree, the route definitions, and the
//! prerendered pages; rewrite asset references into Liquid `asset_url`
//! expressions; materialize one storefront template per route the fixed
//! mapping table knows about.

pub mod adapt;
pub mod builder;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod manifest;
pub mod materialize;
pub mod rewrite;
pub mod templates;

pub use adapt::Adapter;
pub use builder::{Builder, CommandBuilder};
pub use config::AdapterConfig;
pub use error::AdapterError;
