pub mod memory;
pub mod postgres;

pub use memory::InMemoryMediaAssetStore;
pub use postgres::PostgresMediaAssetStore;
