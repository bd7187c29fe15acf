//! Podium - A local-first Olympic medal registry with sortable standings

pub mod commands;
pub mod config;
pub mod models;
pub mod registry;
pub mod store;
pub mod validation;
