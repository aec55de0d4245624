// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod aggregate;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod jobs;
pub mod normalize;
pub mod progress;
pub mod report;
pub mod runner;
pub mod store;
