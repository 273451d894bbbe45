pub mod filter;
pub mod loader;
pub mod rating;
pub mod state;
pub mod ui;
