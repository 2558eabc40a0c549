//! Media Renamer Library
//!
//! A library for renaming video and caption files into a normalized naming
//! scheme using season/episode detection and TMDB metadata.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
