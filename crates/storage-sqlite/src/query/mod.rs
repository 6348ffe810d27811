pub mod repository;

pub use repository::QueryRepository;
