use color_eyre::eyre::Result;

use crate::synthesis::feature_table::FeatureTable;
use self::ridgeline::PlottersRenderer;
use self::ridgeline_style::RidgelineStyle;

pub mod colormap;
pub mod ridgeline;
pub mod ridgeline_style;

/// Turns a feature table into an encoded PNG.
pub trait RidgelineRenderer {
    fn render(&self, table: &FeatureTable, style: &RidgelineStyle) -> Result<Vec<u8>>;
}

pub fn render_ridgeline(table: &FeatureTable, style: &RidgelineStyle) -> Result<Vec<u8>> {
    PlottersRenderer.render(table, style)
}
