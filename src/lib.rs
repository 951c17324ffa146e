pub mod character;
pub mod config;
pub mod data;
pub mod error;
pub mod scene;
pub mod shop;
pub mod store;
pub mod viewpoint;
pub mod world;

pub use character::Character;
pub use config::ShopConfig;
pub use error::ShopError;
pub use shop::WeaponShop;
pub use viewpoint::Viewpoint;
