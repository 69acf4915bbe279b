//! API data transfer objects shared by the HTTP surface and its clients.

pub mod api;
