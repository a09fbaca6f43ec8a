extern crate plotters;
extern crate image as image_rs;

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use color_eyre::eyre::{eyre, Result};
use image_rs::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::style::{register_font, FontStyle};
use tracing::{debug, warn};

use crate::{float,Float};
use crate::numerics::{extend_range, linspace};
use crate::numerics::kde::GaussianKde;
use crate::synthesis::feature_table::FeatureTable;
use crate::visualize::RidgelineRenderer;
use crate::visualize::ridgeline_style::RidgelineStyle;

const FONT_FAMILY: &str = "sans-serif";
const X_LABEL_COUNT: usize = 6;

static FONT_REGISTERED: AtomicBool = AtomicBool::new(false);

#[derive(Debug,Clone)]
pub struct Ridge {
    pub name: String,
    pub color: RGBColor,
    pub alpha: Float,
    pub density: Vec<Float>
}

/// Everything needed to draw the ridges into one shared chart.
/// All ridges share the x grid and are scaled by the same density maximum.
/// In chart units each ridge owns a band of height 1 and may reach `overlap` bands above it.
#[derive(Debug,Clone)]
pub struct RidgelineLayout {
    pub xs: Vec<Float>,
    pub ridges: Vec<Ridge>,
    pub density_max: Float,
    pub overlap: Float
}

impl RidgelineLayout {

    pub fn new(table: &FeatureTable, style: &RidgelineStyle) -> Result<RidgelineLayout> {
        let (min,max) = table.value_range().ok_or_else(|| eyre!("cannot lay out ridges for an empty table"))?;
        if table.row_count() < 2 {
            return Err(eyre!("a density estimate needs at least two samples per column, got {}", table.row_count()));
        }
        if style.grid_points < 2 {
            return Err(eyre!("grid_points must be at least 2, got {}", style.grid_points));
        }
        if !(style.overlap.is_finite() && style.overlap >= 0.0) {
            return Err(eyre!("overlap must be finite and non-negative, got {}", style.overlap));
        }

        let (x_min,x_max) = extend_range(min, max, style.x_range_extra);
        let xs = linspace(x_min, x_max, style.grid_points);
        let count = table.column_count();

        let ridges = table.columns().iter().enumerate().map(|(i,column)| {
            let kde = GaussianKde::new(&column.samples);
            Ridge {
                name: column.name.clone(),
                color: style.colormap.sample(i as Float/count as Float),
                alpha: style.ridge_alpha(i, count),
                density: kde.evaluate_all(&xs)
            }
        }).collect::<Vec<Ridge>>();

        let density_max = ridges.iter().flat_map(|r| r.density.iter()).fold(float::MIN, |acc, &d| acc.max(d));

        debug!(ridges = ridges.len(), x_min, x_max, density_max, "computed ridgeline layout");
        Ok(RidgelineLayout { xs, ridges, density_max, overlap: style.overlap })
    }

    pub fn x_range(&self) -> (Float,Float) {
        (self.xs[0], self.xs[self.xs.len()-1])
    }

    pub fn y_range(&self) -> (Float,Float) {
        (0.0, self.ridges.len() as Float + self.overlap)
    }

    /// Ridge 0 sits on top, the last ridge on y = 0.
    pub fn baseline(&self, index: usize) -> Float {
        (self.ridges.len() - 1 - index) as Float
    }

    pub fn ridge_height(&self) -> Float {
        1.0 + self.overlap
    }

    pub fn ridge_points(&self, index: usize) -> Vec<(Float,Float)> {
        let baseline = self.baseline(index);
        let height = self.ridge_height();
        self.xs.iter().zip(self.ridges[index].density.iter())
            .map(|(&x,&d)| (x, baseline + d/self.density_max*height))
            .collect()
    }

    /// Ridge name for a y axis key point, empty off the baselines.
    pub fn label_at(&self, y: Float) -> String {
        let k = y.round();
        if (y - k).abs() > 1e-6 || k < 0.0 || k as usize >= self.ridges.len() {
            return String::new();
        }
        self.ridges[self.ridges.len() - 1 - k as usize].name.clone()
    }
}

pub struct PlottersRenderer;

impl RidgelineRenderer for PlottersRenderer {
    fn render(&self, table: &FeatureTable, style: &RidgelineStyle) -> Result<Vec<u8>> {
        let layout = RidgelineLayout::new(table, style)?;
        let (width,height) = style.pixel_size();
        let buffer_len = style.pixel_buffer_len()?;
        let fonts_available = ensure_font(&style.font_paths);
        if !fonts_available {
            warn!("no usable font found in font_paths, drawing ridges without text");
        }

        let mut buffer = vec![0u8; buffer_len];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width,height)).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;
            draw_chart(&root, &layout, style, fonts_available)?;
            root.present().map_err(plot_err)?;
        }

        let image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| eyre!("pixel buffer does not match {}x{}", width, height))?;
        let mut bytes = Vec::<u8>::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> color_eyre::Report {
    eyre!("plotting failed: {}", e)
}

/// Registers the first readable font in `font_paths`. Registration is global and only a success is remembered.
pub fn ensure_font(font_paths: &[PathBuf]) -> bool {
    if FONT_REGISTERED.load(Ordering::Acquire) {
        return true;
    }
    for path in font_paths {
        if let Ok(bytes) = fs::read(path) {
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_ok() {
                debug!(path = %path.display(), "registered font");
                FONT_REGISTERED.store(true, Ordering::Release);
                return true;
            }
        }
    }
    false
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, layout: &RidgelineLayout, style: &RidgelineStyle, with_text: bool) -> Result<()> {
    let label_px = style.points_to_pixels(style.label_font_pt);
    let (x_min,x_max) = layout.x_range();
    let (y_min,y_max) = layout.y_range();
    let margin = match style.tight_layout {
        true => 8,
        false => (0.1*style.pixel_size().1 as Float) as u32
    };

    let mut builder = ChartBuilder::on(root);
    builder.margin(margin);
    if with_text {
        builder
            .set_label_area_size(LabelAreaPosition::Left, (label_px*5.5) as u32)
            .set_label_area_size(LabelAreaPosition::Bottom, (label_px*2.0) as u32);
        if !style.title.is_empty() {
            builder.caption(&style.title, (FONT_FAMILY, style.points_to_pixels(style.title_font_pt)));
        }
    }
    let mut chart = builder.build_cartesian_2d(x_min..x_max, y_min..y_max).map_err(plot_err)?;

    if with_text {
        let x_label_formatter = |x: &Float| format_tick(*x);
        let y_label_formatter = |y: &Float| layout.label_at(*y);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(X_LABEL_COUNT)
            .x_label_formatter(&x_label_formatter)
            .y_labels(y_max.floor() as usize + 1)
            .y_label_formatter(&y_label_formatter)
            .label_style((FONT_FAMILY, label_px))
            .draw()
            .map_err(plot_err)?;
    }

    // later ridges are drawn over earlier ones, the same as stacking subplots top to bottom
    for (i,ridge) in layout.ridges.iter().enumerate() {
        let baseline = layout.baseline(i);
        let points = layout.ridge_points(i);
        let fill = ridge.color.mix(ridge.alpha);

        let annotation = chart.draw_series(AreaSeries::new(points.iter().cloned(), baseline, fill.filled())).map_err(plot_err)?;
        if style.legend && with_text {
            annotation
                .label(ridge.name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));
        }

        if style.line_width > 0 {
            chart.draw_series(LineSeries::new(points, BLACK.stroke_width(style.line_width))).map_err(plot_err)?;
            chart.draw_series(LineSeries::new(vec!((x_min, baseline), (x_max, baseline)), BLACK.stroke_width(style.line_width))).map_err(plot_err)?;
        }
    }

    if style.legend && with_text {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font((FONT_FAMILY, label_px))
            .draw()
            .map_err(plot_err)?;
    }

    Ok(())
}

fn format_tick(value: Float) -> String {
    let rounded = value.round();
    match (value - rounded).abs() < 1e-9 {
        true => format!("{}", rounded as i64),
        false => format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[(&str, Vec<Float>)]) -> FeatureTable {
        let mut table = FeatureTable::new();
        for (name,samples) in columns {
            table.push_column(name, samples.clone()).unwrap();
        }
        table
    }

    #[test]
    fn layout_shares_one_x_grid() {
        let t = table(&[("a", vec![0.0, 1.0, 2.0]), ("b", vec![8.0, 9.0, 10.0])]);
        let style = RidgelineStyle::default();
        let layout = RidgelineLayout::new(&t, &style).unwrap();

        assert_eq!(layout.xs.len(), 1000);
        assert_eq!(layout.x_range(), (-2.0, 12.0));
        for ridge in &layout.ridges {
            assert_eq!(ridge.density.len(), layout.xs.len());
        }
        let max = layout.ridges.iter().flat_map(|r| r.density.iter().cloned()).fold(0.0, Float::max);
        assert_eq!(max, layout.density_max);
    }

    #[test]
    fn layout_colors_and_fades_in_column_order() {
        let t = table(&[("a", vec![0.0, 1.0]), ("b", vec![0.5, 1.5]), ("c", vec![1.0, 2.0])]);
        let style = RidgelineStyle::default();
        let layout = RidgelineLayout::new(&t, &style).unwrap();

        let names = layout.ridges.iter().map(|r| r.name.as_str()).collect::<Vec<&str>>();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(layout.ridges[0].color, style.colormap.sample(0.0));
        assert_eq!(layout.ridges[2].color, style.colormap.sample(2.0/3.0));
        assert!(layout.ridges[0].alpha < layout.ridges[1].alpha);
        assert!((layout.ridges[2].alpha - 1.0).abs() < 1e-12);
    }

    #[test]
    fn layout_rejects_bad_input() {
        let style = RidgelineStyle::default();
        assert!(RidgelineLayout::new(&FeatureTable::new(), &style).is_err());
        assert!(RidgelineLayout::new(&table(&[("a", vec![1.0])]), &style).is_err());

        let negative_overlap = RidgelineStyle { overlap: -1.0, ..RidgelineStyle::default() };
        assert!(RidgelineLayout::new(&table(&[("a", vec![1.0, 2.0])]), &negative_overlap).is_err());
    }

    #[test]
    fn density_peaks_near_column_center() {
        let t = table(&[("a", vec![4.0, 5.0, 5.0, 6.0]), ("b", vec![-1.0, 0.0, 0.0, 1.0])]);
        let layout = RidgelineLayout::new(&t, &RidgelineStyle::default()).unwrap();
        let argmax = |d: &Vec<Float>| d.iter().enumerate().fold((0,float::MIN), |acc,(i,&v)| if v > acc.1 {(i,v)} else {acc}).0;
        assert!((layout.xs[argmax(&layout.ridges[0].density)] - 5.0).abs() < 0.1);
        assert!((layout.xs[argmax(&layout.ridges[1].density)] - 0.0).abs() < 0.1);
    }

    #[test]
    fn ridges_stack_top_to_bottom_inside_the_y_range() {
        let columns = (0..6).map(|i| (["a","b","c","d","e","f"][i], vec![i as Float, i as Float + 1.0, i as Float + 3.0])).collect::<Vec<_>>();
        let layout = RidgelineLayout::new(&table(&columns), &RidgelineStyle::default()).unwrap();

        assert_eq!(layout.y_range(), (0.0, 7.0));
        let baselines = (0..6).map(|i| layout.baseline(i)).collect::<Vec<Float>>();
        assert_eq!(baselines, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);

        let (_,y_max) = layout.y_range();
        let mut peaks = Vec::<Float>::new();
        for i in 0..6 {
            let points = layout.ridge_points(i);
            for &(_,y) in &points {
                assert!(y >= layout.baseline(i) && y <= y_max + 1e-9);
            }
            peaks.push(points.iter().map(|p| p.1 - layout.baseline(i)).fold(float::MIN, Float::max));
        }
        // the ridge holding the global density maximum is exactly one ridge height tall
        assert!(peaks.iter().any(|&p| (p - layout.ridge_height()).abs() < 1e-9));
    }

    #[test]
    fn y_labels_sit_on_baselines() {
        let t = table(&[("top", vec![0.0, 1.0]), ("middle", vec![0.0, 1.0]), ("bottom", vec![0.0, 1.0])]);
        let layout = RidgelineLayout::new(&t, &RidgelineStyle::default()).unwrap();
        assert_eq!(layout.label_at(2.0), "top");
        assert_eq!(layout.label_at(1.0), "middle");
        assert_eq!(layout.label_at(0.0), "bottom");
        assert_eq!(layout.label_at(0.5), "");
        assert_eq!(layout.label_at(3.0), "");
        assert_eq!(layout.label_at(-1.0), "");
    }

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(format_tick(5.0), "5");
        assert_eq!(format_tick(-10.000000000001), "-10");
        assert_eq!(format_tick(2.5), "2.5");
    }

    #[test]
    fn failed_font_lookup_is_not_remembered() {
        assert!(!ensure_font(&[]));
        assert!(!ensure_font(&[PathBuf::from("/definitely/not/a/font.ttf")]));

        let default_paths = RidgelineStyle::default().font_paths;
        let readable = default_paths.iter().any(|p| fs::metadata(p).is_ok());
        assert_eq!(ensure_font(&default_paths), readable);
    }
}
