//! Wandering-tracer backdrop animation.
//!
//! A handful of lines radiate from the viewport center on a hexagonal
//! lattice, leaving trails that fade through a translucent repaint veil.
//! The pointer bends nearby lines toward it and brightens their stroke.

mod component;
mod render;
pub mod tracer;

pub use component::SparkleBackdrop;
pub use tracer::{TracerField, TracerOptions};
