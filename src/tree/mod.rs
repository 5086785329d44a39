pub mod config;
pub mod predict;
mod setters;
pub mod tree;
