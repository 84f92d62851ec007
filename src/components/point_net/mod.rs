//! Point-network backdrop animation.
//!
//! Maintains a live, visually evolving graph of points over the full
//! viewport, rendering connective lines and traveling sparks on an HTML
//! canvas:
//! - Grid-seeded points with a bounded-degree nearest-neighbor graph
//! - Perpetual eased drift with periodic connection re-evaluation
//! - Pointer-proximity activity driving line and label opacity
//! - Probabilistic sparks traveling along active edges
//!
//! # Example
//!
//! ```ignore
//! use bsa_backdrop::components::point_net::PointNetBackdrop;
//! use bsa_backdrop::components::theme::Theme;
//!
//! view! { <PointNetBackdrop grid_divisor=12 theme=Theme::default_theme() /> }
//! ```

mod component;
pub mod field;
mod render;
pub mod sparks;

pub use component::PointNetBackdrop;
pub use field::{Point, PointField, MAX_NEIGHBORS};
pub use sparks::{EdgeKey, Spark, SparkSystem};
