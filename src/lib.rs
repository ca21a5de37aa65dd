//! Client-side core of a rental-property classifieds app: backend API
//! client, record normalization, and the filter/sort/search pipeline.

pub mod api;
pub mod config;
pub mod format;
pub mod locations;
pub mod mapper;
pub mod models;
pub mod search;
pub mod session;
