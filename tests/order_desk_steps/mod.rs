//! Step definitions shared by the order desk scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
