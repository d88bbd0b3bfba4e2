mod beer;
mod error;
mod hashmap;
mod repository;
mod service;

pub mod http;
pub mod stock;

pub use beer::{Beer, BeerId, BeerType, NewBeer};
pub use error::StockError;
pub use hashmap::HashMapRepository;
pub use repository::BeerRepository;
pub use service::BeerService;
