//! Presale countdown display.

mod component;
pub mod time_left;

pub use component::CountdownTimer;
pub use time_left::{ring_geometry, ring_lengths, RingGeometry, TimeLeft};
