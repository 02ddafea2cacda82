//! Wireframe model data: vertices, edges, default color.
//!
//! Tanks, turrets, projectiles and pickups are all the same shape of data;
//! there is one model type and one renderer, not a class per entity. The
//! per-instance position/rotation/color live at the draw call.
//!
//! # Invariants
//! - Every edge index is validated at construction; rendering never
//!   bounds-checks.
//! - Models are immutable and shared by reference across render instances.

pub mod catalog;
mod model;
pub mod palette;

pub use model::{Edge, ModelError, WireframeModel, edges_from_pairs};

pub fn crate_info() -> &'static str {
    "vectorscape-model v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("model"));
    }
}
