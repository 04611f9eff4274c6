// src/lib.rs

pub mod client;
pub mod config;
pub mod error;
pub mod game;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod terminal;
