use serde::{Deserialize, Serialize};

use crate::domain::DomainScale;

/// Pixel geometry of a chart.
///
/// The plot area spans `padding..width - padding` horizontally, shifted right
/// by `offset` to leave room for y labels, and `padding..height - padding`
/// vertically with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub offset: f64,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            padding: 40.0,
            offset: 15.0,
        }
    }
}

/// Horizontal placement of one bar in a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSlot {
    /// Center of the slot in pixels.
    pub center: f64,
    /// Full slot width; bars are usually drawn narrower.
    pub width: f64,
}

impl PlotFrame {
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Maps a data x to a pixel x. An empty domain is treated as one unit wide.
    #[must_use]
    pub fn x_to_px(&self, x: f64, domain: &DomainScale) -> f64 {
        let span = domain.max_x - domain.min_x;
        let span = if span > 0.0 { span } else { 1.0 };
        self.padding + self.offset + (x - domain.min_x) / span * self.plot_width()
    }

    /// Maps a data y to a pixel y. A zero `max_y` scales by 1.
    ///
    /// ```
    /// # use probviz_curve::PlotFrame;
    /// let frame = PlotFrame::default();
    /// assert_eq!(frame.y_to_py(0.0, 0.5), 260.0);
    /// assert_eq!(frame.y_to_py(0.5, 0.5), 40.0);
    /// assert_eq!(frame.y_to_py(0.0, 0.0), 260.0);
    /// ```
    #[must_use]
    pub fn y_to_py(&self, y: f64, max_y: f64) -> f64 {
        let scale = if max_y > 0.0 { max_y } else { 1.0 };
        self.height - self.padding - (y / scale) * self.plot_height()
    }

    /// Slot of bar `index` out of `categories` equal-width bars.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bar_slot(&self, index: usize, categories: usize) -> BarSlot {
        let width = self.plot_width() / categories.max(1) as f64;
        BarSlot {
            center: self.padding + self.offset + index as f64 * width + width / 2.0,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use probviz_stats::Family;

    use super::*;

    fn domain(min_x: f64, max_x: f64) -> DomainScale {
        DomainScale {
            family: Family::Normal,
            min_x,
            max_x,
            max_y: 1.0,
        }
    }

    #[test]
    fn test_x_mapping_spans_plot_area() {
        let frame = PlotFrame::default();
        let domain = domain(-4.0, 4.0);
        assert_eq!(frame.x_to_px(-4.0, &domain), 55.0);
        assert_eq!(frame.x_to_px(0.0, &domain), 315.0);
        assert_eq!(frame.x_to_px(4.0, &domain), 575.0);
    }

    #[test]
    fn test_x_mapping_of_empty_domain() {
        let frame = PlotFrame::default();
        let px = frame.x_to_px(2.0, &domain(2.0, 2.0));
        assert!(px.is_finite());
        assert_eq!(px, 55.0);
    }

    #[test]
    fn test_bar_slots_tile_the_axis() {
        let frame = PlotFrame::default();
        let first = frame.bar_slot(0, 11);
        let last = frame.bar_slot(10, 11);
        assert!((first.width - 520.0 / 11.0).abs() < 1e-12);
        assert!((first.center - (55.0 + first.width / 2.0)).abs() < 1e-12);
        assert!((last.center + last.width / 2.0 - 575.0).abs() < 1e-9);
    }
}
