//! Numbers behind the presentational dashboard widgets.

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    /// Tailwind background class; the widget's default when unset.
    pub color: Option<&'static str>,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn colored(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

/// Bar heights as a fraction of the tallest bar.
///
/// Each value is divided by the maximum. When there is no positive finite
/// maximum (empty input, all values <= 0, NaN) every bar gets 0.0 instead of
/// a non-finite ratio. Individual fractions are clamped to `[0, 1]`.
pub fn bar_fractions(values: &[f64]) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    if !(max.is_finite() && max > 0.0) {
        return vec![0.0; values.len()];
    }

    values
        .iter()
        .map(|v| {
            if v.is_finite() {
                (v / max).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// CSS height for a bar fraction, e.g. `"25%"`.
pub fn percent_style(fraction: f64) -> String {
    let pct = (fraction * 100.0).clamp(0.0, 100.0);
    if pct.fract() == 0.0 {
        format!("{pct:.0}%")
    } else {
        format!("{pct:.1}%")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Badge in the corner of a stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub label: String,
    pub direction: TrendDirection,
}

impl Trend {
    pub fn up(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            direction: TrendDirection::Up,
        }
    }

    pub fn down(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            direction: TrendDirection::Down,
        }
    }

    pub fn neutral(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            direction: TrendDirection::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_proportional_to_the_maximum() {
        let fractions = bar_fractions(&[10.0, 20.0, 5.0]);
        assert_eq!(fractions, vec![0.5, 1.0, 0.25]);
    }

    #[test]
    fn degenerate_inputs_render_flat() {
        assert!(bar_fractions(&[]).is_empty());
        assert_eq!(bar_fractions(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(bar_fractions(&[-3.0, -1.0]), vec![0.0, 0.0]);
        assert_eq!(bar_fractions(&[f64::NAN, 4.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        assert_eq!(bar_fractions(&[-5.0, 10.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn percent_style_formats() {
        assert_eq!(percent_style(1.0), "100%");
        assert_eq!(percent_style(0.25), "25%");
        assert_eq!(percent_style(1.0 / 3.0), "33.3%");
    }
}
