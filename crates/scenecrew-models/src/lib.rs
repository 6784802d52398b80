//! Shared data models for the SceneCrew backend.
//!
//! This crate provides Serde-serializable types for:
//! - Scene records extracted from model output
//! - HTTP request/response schemas shared by the API and CLI front ends

pub mod api;
pub mod scene;

// Re-export common types
pub use api::{ErrorResponse, GenerateRequest, GenerateResponse};
pub use scene::{Scene, SceneBreakdown};
