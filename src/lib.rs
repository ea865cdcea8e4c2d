pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod matcher;
pub mod page;
pub mod render;
pub mod tracing;
