//! Map widget template tags for minijinja, and a small actix-web site that
//! serves pages using them.

pub mod config;
pub mod routes;
pub mod tags;
pub mod templates;
