//! Raw archive - immutable log of as-fetched payloads.

mod raw_data_model;
mod raw_data_traits;

pub use raw_data_model::{NewRawRecord, RawRecord};
pub use raw_data_traits::RawDataRepositoryTrait;
