//! Test fixtures for route-planner.
//!
//! Provides OpenRouteService-shaped payloads:
//! - directions documents (single leg, multi-step, empty)
//! - geocoding responses for a few Mexican cities

#![allow(dead_code)]

pub mod ors_responses;

pub use ors_responses::*;
