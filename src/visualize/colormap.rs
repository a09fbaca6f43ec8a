use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::Float;

// Sequential scales sampled at t = 0.0, 0.1, ..., 1.0
const MAGMA: [(u8,u8,u8); 11] = [
    (0x00,0x00,0x04),
    (0x14,0x0e,0x36),
    (0x3b,0x0f,0x70),
    (0x64,0x1a,0x80),
    (0x8c,0x29,0x81),
    (0xb7,0x37,0x79),
    (0xde,0x49,0x68),
    (0xf7,0x70,0x5c),
    (0xfe,0x9f,0x6d),
    (0xfe,0xcf,0x92),
    (0xfc,0xfd,0xbf)
];

const VIRIDIS: [(u8,u8,u8); 11] = [
    (0x44,0x01,0x54),
    (0x48,0x24,0x75),
    (0x41,0x44,0x87),
    (0x35,0x5f,0x8d),
    (0x2a,0x78,0x8e),
    (0x21,0x91,0x8c),
    (0x22,0xa8,0x84),
    (0x44,0xbf,0x70),
    (0x7a,0xd1,0x51),
    (0xbd,0xdf,0x26),
    (0xfd,0xe7,0x25)
];

#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    Magma,
    Viridis
}

impl Colormap {

    /// Color at `t`, clamped to [0,1].
    pub fn sample(&self, t: Float) -> RGBColor {
        let anchors = match self {
            Colormap::Magma => &MAGMA,
            Colormap::Viridis => &VIRIDIS
        };

        let t = match t {
            t if t.is_nan() || t < 0.0 => 0.0,
            t if t > 1.0 => 1.0,
            t => t
        };

        let segments = (anchors.len()-1) as Float;
        let position = t*segments;
        let lower = (position.floor() as usize).min(anchors.len()-2);
        let frac = position - lower as Float;

        let (r0,g0,b0) = anchors[lower];
        let (r1,g1,b1) = anchors[lower+1];
        RGBColor(lerp(r0,r1,frac), lerp(g0,g1,frac), lerp(b0,b1,frac))
    }
}

impl Default for Colormap {
    fn default() -> Colormap {
        Colormap::Magma
    }
}

fn lerp(a: u8, b: u8, t: Float) -> u8 {
    (a as Float + (b as Float - a as Float)*t).round() as u8
}

pub fn luminance(color: &RGBColor) -> Float {
    0.2126*color.0 as Float + 0.7152*color.1 as Float + 0.0722*color.2 as Float
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_anchors() {
        assert_eq!(Colormap::Magma.sample(0.0), RGBColor(0x00,0x00,0x04));
        assert_eq!(Colormap::Magma.sample(1.0), RGBColor(0xfc,0xfd,0xbf));
        assert_eq!(Colormap::Viridis.sample(0.5), RGBColor(0x21,0x91,0x8c));
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(Colormap::Magma.sample(-3.0), Colormap::Magma.sample(0.0));
        assert_eq!(Colormap::Magma.sample(7.0), Colormap::Magma.sample(1.0));
        assert_eq!(Colormap::Magma.sample(Float::NAN), Colormap::Magma.sample(0.0));
    }

    #[test]
    fn magma_gets_brighter() {
        let lum = (0..=20).map(|i| luminance(&Colormap::Magma.sample(i as Float/20.0))).collect::<Vec<Float>>();
        for w in lum.windows(2) {
            assert!(w[1] >= w[0], "{:?}", lum);
        }
    }

    #[test]
    fn midpoint_interpolates() {
        let c = Colormap::Magma.sample(0.05);
        assert_eq!(c, RGBColor(0x0a,0x07,0x1d));
    }
}
