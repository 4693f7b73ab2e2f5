//! Conversational movie recommendation service: a free-text mood comes in,
//! a curated shelf of films with pairings and viewing notes goes out.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
