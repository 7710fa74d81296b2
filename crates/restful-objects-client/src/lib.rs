//! # restful-objects client
//!
//! Typed client for the public object API served at `https://api.restful-api.dev/`.
//!
//! This crate provides:
//! - Data models mirroring the API's JSON shape (`Item`, `Attributes`, `DeleteConfirmation`)
//! - An HTTP client covering list, get, create, update and delete
//! - An error taxonomy separating transport, status and decode failures
//!
//! # Examples
//!
//! ```rust,no_run
//! use restful_objects_client::{ClientConfig, ItemId, ObjectsClient};
//!
//! # async fn example() -> Result<(), restful_objects_client::ApiError> {
//! let client = ObjectsClient::builder()
//!     .config(ClientConfig::default())
//!     .build()?;
//!
//! let item = client.get_item(&ItemId::new("1")).await?;
//! println!("{}", item.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::{
    ClientConfig, ClientConfigBuilder, ObjectsClient, ObjectsClientBuilder, UpdateBodyEncoding,
    DEFAULT_BASE_URL,
};
pub use error::ApiError;
pub use models::{Attributes, DeleteConfirmation, Item, ItemId};
