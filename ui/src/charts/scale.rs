//! Minimal linear and band scales for positioning SVG chart geometry.
//!
//! Just enough of the usual plotting-scale surface: linear mapping with
//! 1-2-5 "nice" ticks, and evenly padded bands for categorical axes.

/// Linear mapping from a numeric domain onto a pixel range. The range may
/// run high-to-low, which is how y axes are set up in SVG space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Like `new`, but widens the domain outwards to tick-step multiples so
    /// axis ends land on round values.
    pub fn nice(domain: (f64, f64), range: (f64, f64), tick_count: usize) -> Self {
        let (d0, d1) = domain;
        if d1 <= d0 {
            return Self::new(domain, range);
        }
        let step = tick_step(d1 - d0, tick_count);
        Self::new(((d0 / step).floor() * step, (d1 / step).ceil() * step), range)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, at most roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d1 <= d0 || count == 0 {
            return vec![d0];
        }
        let step = tick_step(d1 - d0, count);
        let mut ticks = Vec::new();
        let mut tick = (d0 / step).ceil() * step;
        while tick <= d1 + step * 1e-9 {
            ticks.push(tick);
            tick += step;
        }
        ticks
    }
}

/// Step size from the 1-2-5 progression closest to `span / count`.
fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual >= 7.5 {
        10.0
    } else if residual >= 3.5 {
        5.0
    } else if residual >= 1.5 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Evenly spaced bands for categorical axes, with symmetric inner padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 0.9),
        }
    }

    fn slot(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.count as f64
    }

    pub fn band_width(&self) -> f64 {
        self.slot() * (1.0 - self.padding)
    }

    /// Leading edge of band `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.slot() * (index as f64 + self.padding / 2.0)
    }

    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.band_width() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_domain_endpoints_onto_the_range() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 200.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(10.0), 200.0);
        assert_eq!(scale.scale(5.0), 100.0);
    }

    #[test]
    fn linear_scale_supports_inverted_ranges() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_eq!(scale.scale(0.0), 300.0);
        assert_eq!(scale.scale(100.0), 0.0);
        assert_eq!(scale.scale(25.0), 225.0);
    }

    #[test]
    fn degenerate_domain_maps_to_the_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.scale(5.0), 50.0);
        assert_eq!(scale.ticks(5), vec![5.0]);
    }

    #[test]
    fn nice_extends_the_domain_to_round_bounds() {
        let scale = LinearScale::nice((0.0, 97.0), (0.0, 1.0), 5);
        assert_eq!(scale.domain(), (0.0, 100.0));

        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn tick_steps_follow_the_one_two_five_progression() {
        assert_eq!(tick_step(100.0, 5), 20.0);
        assert_eq!(tick_step(10.0, 5), 2.0);
        assert!((tick_step(1.0, 4) - 0.2).abs() < 1e-12);
        assert_eq!(tick_step(7.0, 7), 1.0);
    }

    #[test]
    fn bands_are_evenly_spaced_with_symmetric_padding() {
        let bands = BandScale::new(3, (0.0, 300.0), 0.2);
        assert_eq!(bands.band_width(), 80.0);
        assert_eq!(bands.position(0), 10.0);
        assert_eq!(bands.position(1), 110.0);
        assert_eq!(bands.position(2), 210.0);
        assert_eq!(bands.center(1), 150.0);
    }

    #[test]
    fn empty_band_scale_collapses_without_panicking() {
        let bands = BandScale::new(0, (0.0, 100.0), 0.1);
        assert_eq!(bands.band_width(), 0.0);
        assert_eq!(bands.position(0), 0.0);
    }
}
