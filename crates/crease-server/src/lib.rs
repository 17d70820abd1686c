//! HTTP server for the overlay: score endpoint, health, OpenAPI docs and
//! static assets.

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
