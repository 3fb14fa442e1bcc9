//! Timer-driven dashboard state: configuration, the tick driver and the
//! per-tick frames handed to a renderer.

mod config;
mod driver;
mod frame;

pub use config::DashboardConfig;
pub use driver::TickDriver;
pub use frame::{Channel, Frame, Trace};
