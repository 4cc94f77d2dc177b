pub mod client;
pub mod error;
pub mod graphql;
pub mod normalize;
pub mod pagination;
pub mod types;

pub use client::{AdminClient, CatalogPager};
pub use error::AdminError;
pub use normalize::normalize_product;
pub use types::{PageInfo, ProductNode};
