//! Shared plotting domain and axis layout for overlaid distribution curves.
//!
//! A chart shows one family with any number of curves. [`DomainScale::resolve`]
//! computes the x range and y scale they share, [`ticks`] lays out the axes, and
//! [`sample_curve`] turns each curve into a polyline. [`PlotFrame`] maps data
//! coordinates to pixels for renderers that draw the result.
//!
//! [`CurveChart::build`] does all of this in one call.
//!
//! ```
//! use probviz_curve::{CurveChart, CurveConfig, CurveKind};
//! use probviz_stats::Family;
//!
//! let curves = ["0,1,2563eb,standard", "2,0.5,e11d48"]
//!     .into_iter()
//!     .map(|s| CurveConfig::parse(Family::Normal, s))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let chart = CurveChart::build(Family::Normal, curves, 200, CurveKind::Density).unwrap();
//! assert_eq!((chart.domain.min_x, chart.domain.max_x), (-4.0, 4.0));
//! assert_eq!(chart.curves[1].points.len(), 201);
//! ```

pub use self::{
    chart::{CurveChart, PlottedCurve},
    color::{COMMON_COLORS, Color, ParseColorError, first_unused_color},
    config::{CurveConfig, CurveError},
    domain::DomainScale,
    frame::{BarSlot, PlotFrame},
    polyline::{CurveKind, CurvePoint, default_steps, sample_curve},
};

mod chart;
pub mod color;
mod config;
pub mod domain;
mod frame;
mod polyline;
pub mod ticks;
