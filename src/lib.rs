//! Control page for the weather clock. The clock's dial indicates one weather
//! metric at a time; this serves the page used to pick which one.

pub mod api;
pub mod config;
pub mod metric;
pub mod render;
pub mod state;
