//! Sort-state engine for data-grid header cells.
//!
//! [engine] holds the pure rules: which direction a column is sorted in, which direction a
//! trigger moves it to, and how the ordered sort list changes. [components] builds the header
//! cell state and the grid-side owner of the sort list on top of it.

pub mod action;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod models;
pub mod utils;
