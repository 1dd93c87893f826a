// ABOUTME: Database module - per-call MySQL access for the query tools.
// ABOUTME: Identifiers are allow-listed against the live schema before use.

mod client;
mod schema;

pub use client::*;
pub use schema::*;
