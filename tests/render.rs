use ridgeline::io::is_png;
use ridgeline::synthesis::{seeded_rng, synthesize_features};
use ridgeline::synthesis::synthesis_parameters::SynthesisParameters;
use ridgeline::visualize::{render_ridgeline, RidgelineRenderer};
use ridgeline::visualize::ridgeline::PlottersRenderer;
use ridgeline::visualize::ridgeline_style::RidgelineStyle;

fn default_table() -> ridgeline::synthesis::feature_table::FeatureTable {
    let parameters = SynthesisParameters::default();
    synthesize_features(&mut seeded_rng(parameters.seed), &parameters).unwrap()
}

#[test]
fn renders_960_by_600_png() {
    let bytes = render_ridgeline(&default_table(), &RidgelineStyle::default()).unwrap();
    assert!(is_png(&bytes));

    let image = image::load_from_memory(&bytes).unwrap();
    assert_eq!((image.width(), image.height()), (960, 600));
}

#[test]
fn ridges_are_drawn_on_white() {
    let bytes = PlottersRenderer.render(&default_table(), &RidgelineStyle::default()).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgb8();

    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
    let colored = image.pixels().filter(|p| p.0 != [255, 255, 255]).count();
    assert!(colored > 960*600/20, "only {} non-white pixels", colored);
}

#[test]
fn dpi_scales_the_canvas() {
    let style = RidgelineStyle { dpi: 60, ..RidgelineStyle::default() };
    let bytes = render_ridgeline(&default_table(), &style).unwrap();
    let image = image::load_from_memory(&bytes).unwrap();
    assert_eq!((image.width(), image.height()), (480, 300));
}

#[test]
fn empty_table_is_an_error() {
    let table = ridgeline::synthesis::feature_table::FeatureTable::new();
    assert!(render_ridgeline(&table, &RidgelineStyle::default()).is_err());
}

#[test]
fn oversized_canvas_is_an_error() {
    let style = RidgelineStyle { dpi: 10000, ..RidgelineStyle::default() };
    assert!(render_ridgeline(&default_table(), &style).is_err());
}
