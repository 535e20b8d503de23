// src/core.rs
pub mod classifier;
pub mod diagram;
pub mod exclude;
pub mod ignore_file;
pub mod pipeline;
pub mod placeholder;
pub mod scanner;
