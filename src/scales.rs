/// Linear mapping between a data domain and a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut scale = Self {
            domain: (0.0, 1.0),
            range,
        };
        scale.update_domain(domain.0, domain.1);
        scale
    }

    pub fn map(&self, value: f64) -> f32 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let res = r_min as f64 + (value - d_min) / (d_max - d_min) * (r_max - r_min) as f64;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res as f32
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let r_span = (r_max - r_min) as f64;
        if r_span == 0.0 {
            return d_min;
        }
        d_min + (pixel - r_min) as f64 / r_span * (d_max - d_min)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        let mut d_min = min;
        let mut d_max = max;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        self.domain = (d_min, d_max);
    }
}
