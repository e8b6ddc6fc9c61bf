//! ECS Components для aimable тел
//!
//! Организация:
//! - body: `Aimable` marker + `AimableBody` capability trait (Rapier adapter)
//! - rest: `RestState` (Resting / Moving по |linvel|)

pub mod body;
pub mod rest;


// Re-exports для удобного импорта
pub use body::*;
pub use rest::*;
