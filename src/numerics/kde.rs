use crate::{float,Float};
use crate::numerics::std_dev;

/// One dimensional gaussian kernel density estimate with Scott's bandwidth rule.
#[derive(Debug,Clone)]
pub struct GaussianKde<'a> {
    samples: &'a [Float],
    bandwidth: Float
}

impl<'a> GaussianKde<'a> {

    pub fn new(samples: &'a [Float]) -> GaussianKde<'a> {
        assert!(samples.len() > 1, "kde needs at least two samples");
        let bandwidth = match scotts_factor(samples.len())*std_dev(samples, 1) {
            bw if bw > 1e-12 => bw,
            // all samples equal
            _ => 1e-3
        };
        GaussianKde { samples, bandwidth }
    }

    pub fn bandwidth(&self) -> Float {
        self.bandwidth
    }

    pub fn evaluate(&self, x: Float) -> Float {
        let norm = 1.0/(self.samples.len() as Float*self.bandwidth*(2.0*float::consts::PI).sqrt());
        norm*self.samples.iter().map(|s| {
            let z = (x-s)/self.bandwidth;
            (-0.5*z*z).exp()
        }).sum::<Float>()
    }

    pub fn evaluate_all(&self, xs: &[Float]) -> Vec<Float> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

pub fn scotts_factor(sample_count: usize) -> Float {
    (sample_count as Float).powf(-1.0/5.0)
}
