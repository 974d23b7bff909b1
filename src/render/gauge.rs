//! Circular progress gauge geometry
//!
//! Converts a 0-100 score into deterministic stroke dash geometry for a ring
//! of fixed logical radius 52. The same percentage always produces the same
//! geometry; no animation state is carried between calls.

/// Fixed logical radius of the gauge ring.
pub const GAUGE_RADIUS: f64 = 52.0;

/// Full circumference of the gauge ring (`2π·52`).
pub fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * GAUGE_RADIUS
}

/// Geometry and label state of one gauge widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gauge {
    /// Total stroke length, always the full circumference once set.
    pub dash_array: f64,
    /// Unfilled remainder of the stroke.
    pub dash_offset: f64,
    /// Text shown at the center of the ring.
    pub value_text: String,
}

impl Gauge {
    /// Sets the gauge to a percentage, clamped to [0, 100].
    ///
    /// When `label` is given it is shown verbatim; otherwise the rounded
    /// clamped percentage is shown.
    pub fn set(&mut self, pct: f64, label: Option<&str>) {
        let clamped = pct.clamp(0.0, 100.0);
        let full = circumference();
        self.dash_array = full;
        self.dash_offset = full - (clamped / 100.0) * full;
        self.value_text = match label {
            Some(text) => text.to_string(),
            None => format!("{}", clamped.round() as i64),
        };
    }

    /// Length of the filled arc.
    pub fn filled_arc(&self) -> f64 {
        self.dash_array - self.dash_offset
    }
}

/// Applies a percentage to an optional gauge reference.
///
/// No-ops when the target widget is absent, so panels can drive gauges that
/// are not present in the current view.
pub fn set_gauge(gauge: Option<&mut Gauge>, pct: f64, label: Option<&str>) {
    if let Some(gauge) = gauge {
        gauge.set(pct, label);
    }
}
