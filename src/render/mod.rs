//! Shared rendering transforms
//!
//! Everything in this module is reused across the analysis panels: currency
//! and label formatting, circular-gauge geometry, chart spec value types, the
//! visualization registry that owns live widgets, and the recommendation
//! list builder.

pub mod chart;
pub mod format;
pub mod gauge;
pub mod recs;
pub mod registry;

pub use chart::{ChartKind, ChartSpec, Series};
pub use format::{category_label, currency, signed_currency};
pub use gauge::{set_gauge, Gauge};
pub use recs::{build_item, RecItem, RecKind, Recommendation};
pub use registry::{VisualizationRegistry, Widget, WidgetFactory};
