//! Application pages

pub mod auth;
pub mod chat;
