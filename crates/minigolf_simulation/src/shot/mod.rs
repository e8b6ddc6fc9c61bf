//! Shot domain: выстрел по завершении aim gesture
//!
//! Содержит:
//! - ShotVector / resolve_shot (direction + power)
//! - shoot (один impulse через AimableBody)
//! - ShotFired (event для клиента / логов)

pub mod resolver;


pub use resolver::*;
