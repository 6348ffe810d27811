//! Read-side query module - models, service and store trait.

mod query_model;
mod query_service;
mod query_traits;

pub use query_model::{AssetQuote, SourceLastRun, Stats};
pub use query_service::QueryService;
pub use query_traits::{QueryServiceTrait, QueryStore};
