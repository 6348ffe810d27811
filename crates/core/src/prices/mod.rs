//! Price observations - domain models and repository traits.

mod prices_model;
mod prices_traits;

pub use prices_model::{NewPriceObservation, PriceObservation};
pub use prices_traits::PriceRepositoryTrait;
