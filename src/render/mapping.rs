use crate::error::{ChartError, ChartResult};
use crate::render::CoordinateMapper;

/// Affine map from a domain interval onto a pixel interval.
///
/// The pixel interval may be reversed (for example `height..0` for a price
/// axis growing upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// `CoordinateMapper` built from two linear scales: candle index to x and
/// price to y. Handy for headless hosts, tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCoordinateMapper {
    pub index_scale: LinearScale,
    pub price_scale: LinearScale,
}

impl ScaleCoordinateMapper {
    #[must_use]
    pub fn new(index_scale: LinearScale, price_scale: LinearScale) -> Self {
        Self {
            index_scale,
            price_scale,
        }
    }

    /// Spreads `bar_count` slots across `width` pixels and maps
    /// `[price_min, price_max]` onto `[height, 0]`.
    pub fn for_viewport(
        bar_count: usize,
        width: f64,
        height: f64,
        price_min: f64,
        price_max: f64,
    ) -> ChartResult<Self> {
        let index_scale = LinearScale::new(0.0, bar_count.max(1) as f64, 0.0, width)?;
        let price_scale = LinearScale::new(price_min, price_max, height, 0.0)?;
        Ok(Self::new(index_scale, price_scale))
    }
}

impl CoordinateMapper for ScaleCoordinateMapper {
    fn index_to_x(&self, index: usize) -> f64 {
        self.index_scale.domain_to_pixel(index as f64)
    }

    fn value_to_y(&self, value: f64) -> f64 {
        self.price_scale.domain_to_pixel(value)
    }
}
