use std::path::PathBuf;
use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

use crate::Float;
use crate::visualize::colormap::Colormap;

pub const DEFAULT_TITLE: &str = "Stacked Ridge (Joy/Ridgeline) Plot Example";

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RidgelineStyle {
    pub colormap: Colormap,
    pub fade: bool,
    pub line_width: u32,
    pub legend: bool,
    /// Width and height in inches
    pub figure_size: (Float,Float),
    pub dpi: u32,
    pub title: String,
    pub tight_layout: bool,
    /// How far a ridge may reach into the band above, in band heights
    pub overlap: Float,
    pub grid_points: usize,
    /// Fraction of the sample range added on each side of the x axis
    pub x_range_extra: Float,
    pub title_font_pt: Float,
    pub label_font_pt: Float,
    pub font_paths: Vec<PathBuf>
}

impl RidgelineStyle {

    pub fn pixel_size(&self) -> (u32,u32) {
        let (width_in, height_in) = self.figure_size;
        ((width_in*self.dpi as Float).round() as u32, (height_in*self.dpi as Float).round() as u32)
    }

    /// Bytes of the RGB canvas. Fails for empty canvases and for sizes that do not fit in u32.
    pub fn pixel_buffer_len(&self) -> Result<usize> {
        let (width,height) = self.pixel_size();
        if width == 0 || height == 0 {
            return Err(eyre!("canvas of {}x{} pixels is empty", width, height));
        }
        width.checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(3))
            .map(|len| len as usize)
            .ok_or_else(|| eyre!("canvas of {}x{} pixels is too large", width, height))
    }

    pub fn points_to_pixels(&self, points: Float) -> Float {
        points*self.dpi as Float/72.0
    }

    /// Opacity of ridge `index` out of `count`. Lower ridges are more opaque when fading.
    pub fn ridge_alpha(&self, index: usize, count: usize) -> Float {
        match self.fade {
            true => 0.4 + (index+1) as Float*0.6/count as Float,
            false => 1.0
        }
    }
}

impl Default for RidgelineStyle {
    fn default() -> RidgelineStyle {
        RidgelineStyle {
            colormap: Colormap::Magma,
            fade: true,
            line_width: 1,
            legend: false,
            figure_size: (8.0,5.0),
            dpi: 120,
            title: DEFAULT_TITLE.to_string(),
            tight_layout: true,
            overlap: 1.0,
            grid_points: 1000,
            x_range_extra: 0.2,
            title_font_pt: 12.0,
            label_font_pt: 10.0,
            font_paths: default_font_paths()
        }
    }
}

pub fn default_font_paths() -> Vec<PathBuf> {
    vec!(
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:/Windows/Fonts/arial.ttf"
    ).into_iter().map(PathBuf::from).collect()
}
