//! Collection key resolution for an object-relational mapping model.
//!
//! A [`CollectionKey`](schema::CollectionKey) links the rows of a collection
//! to the entity owning them. It resolves which navigable the key targets,
//! builds read projections of either side of the join and flattens key
//! values into column-bound scalars for writing.

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses tether's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
