//! donut-chart: an animated donut statistics widget.
//!
//! The crate keeps a strict split between pure geometry/data types (`core`),
//! the frame-driven reveal animation (`animation`), backend-agnostic draw
//! commands (`render`) and the widget facade (`api`). Hosts only provide a
//! renderer, resize events and elapsed frame time.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use animation::FillMode;
pub use api::{DonutChart, DonutChartConfig};
pub use error::{ChartError, ChartResult};
