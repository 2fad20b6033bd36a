//! Stunting prediction service.
//!
//! Serves a pre-trained KNN classifier that estimates a toddler's growth
//! status from sex, age in months and height in centimetres.

pub mod classifier;
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;
