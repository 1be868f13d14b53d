pub mod analysis;
pub mod common;
pub mod localization;
pub mod profile;
pub mod proxy;
pub mod recipe;
pub mod state;
pub mod view;
