//! Transport fare quoting server.
//!
//! A web application that answers: "what should this trip cost, given the
//! vehicle, the distance, fuel prices, and the road and traffic conditions
//! along the way?"

pub mod cache;
pub mod classify;
pub mod config;
pub mod directions;
pub mod domain;
pub mod fare;
pub mod locations;
pub mod providers;
pub mod web;
