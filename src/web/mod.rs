//! Web layer: server-rendered pages for the browser UI.
//!
//! Pages are askama-templated shells; the dashboard and stats pages fetch
//! their data from the JSON API client-side.

pub mod handlers;
pub mod routes;
