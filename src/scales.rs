use d3rs::scale::{BandScale as D3BandScale, LinearScale, Scale as D3Scale};

/// Continuous linear mapping from a data domain to a pixel range.
#[derive(Clone)]
pub struct ChartScale {
    scale: LinearScale,
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self { scale }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.scale.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn range(&self) -> (f32, f32) {
        let (r_min, r_max) = D3Scale::range(&self.scale);
        (r_min as f32, r_max as f32)
    }
}

/// Categorical scale splitting a pixel range into equal bands, one per domain value.
///
/// Duplicate domain values are kept once, at their first position.
#[derive(Clone, Debug)]
pub struct BandScale {
    scale: D3BandScale<String>,
}

impl BandScale {
    pub fn new(range: (f32, f32)) -> Self {
        Self {
            scale: D3BandScale::new().range(range.0 as f64, range.1 as f64),
        }
    }

    pub fn set_domain<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !domain.contains(&value) {
                domain.push(value);
            }
        }
        self.scale = std::mem::take(&mut self.scale).domain(domain);
    }

    pub fn domain(&self) -> &[String] {
        self.scale.get_domain()
    }

    pub fn range(&self) -> (f32, f32) {
        let (start, end) = self.scale.get_range();
        (start as f32, end as f32)
    }

    /// Zero for an empty domain.
    pub fn bandwidth(&self) -> f32 {
        self.scale.bandwidth() as f32
    }

    /// Start of the band for `value`, or `None` when it is not in the domain.
    pub fn map(&self, value: &str) -> Option<f32> {
        self.scale.scale(&value.to_owned()).map(|start| start as f32)
    }

    pub fn center(&self, value: &str) -> Option<f32> {
        self.map(value).map(|start| start + self.bandwidth() / 2.0)
    }

    /// Index of the band containing the pixel position.
    pub fn band_at(&self, pixel: f32) -> Option<usize> {
        self.domain().iter().position(|label| {
            self.map(label)
                .is_some_and(|start| pixel >= start && pixel < start + self.bandwidth())
        })
    }
}
