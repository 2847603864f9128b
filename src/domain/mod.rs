pub mod executor;
pub mod focus_bus;
pub mod history;
pub mod models;
