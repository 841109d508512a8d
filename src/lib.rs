pub mod app;
pub mod caption;
pub mod engine;
pub mod input;
pub mod ui;
