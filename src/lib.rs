pub mod calendar;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod search;
pub mod settings;
pub mod ui;
