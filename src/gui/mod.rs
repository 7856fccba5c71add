pub mod app;
mod constants;
mod formatters;
mod state;
mod types;
mod views;
