//! UI components and the animation engines behind them.

pub mod countdown;
pub mod point_net;
pub mod rng;
pub mod sparkle;
pub mod theme;
