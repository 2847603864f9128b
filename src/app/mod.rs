pub mod action;
pub mod command;
pub mod config;
pub mod handler;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod reducer;
pub mod session;
pub mod state;
pub mod status;
pub mod trigger;
pub mod ui;
