//! Pointer domain: 2D pointer → 3D aim point
//!
//! Содержит:
//! - projection: CameraView, ReferencePlane, project_pointer (чистые функции)
//! - components: PointerProjector, PointerProjection, HoverTarget, PointerMarker
//! - events: PointerInput, PointerState, ActiveCameraView
//! - systems: per-frame projection, hover raycast, marker sync
//!
//! Системы регистрирует `AimPlugin` (единая chained цепочка aim pipeline).

pub mod components;
pub mod events;
pub mod projection;
pub mod systems;

#[cfg(test)]
mod projection_tests;

// Re-export all components and functions
pub use components::*;
pub use events::*;
pub use projection::*;
pub use systems::*;
