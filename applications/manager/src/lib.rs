//! Bookshelf Manager
//!
//! A single-screen book inventory manager for the terminal. It lists,
//! creates, updates, deletes and looks up books through a REST book API.
//!
//! - [`manager::BookManager`] holds the UI state and runs every action
//! - [`view::render`] draws the screen from a [`state::ViewState`] snapshot
//! - [`shell`] reads commands line by line and redraws after each one

pub mod command;
pub mod config;
pub mod manager;
pub mod shell;
pub mod state;
pub mod view;

pub use command::{Command, CommandError};
pub use config::Settings;
pub use manager::BookManager;
pub use state::ViewState;
