//! Raster charts for the campaign summary.
//!
//! Three temperature-sweep charts (one per measured quantity, one curve
//! per pressure) plus one chart per averaged RDF curve.

use std::collections::BTreeMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::model::condition::ConditionKey;
use crate::model::rdf::RdfCurve;
use crate::model::record::Measurements;

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Chart rendering failure. Backend errors are carried as text because
/// the plotters error type is generic over the backend.
#[derive(Debug, thiserror::Error)]
#[error("chart rendering failed: {0}")]
pub struct Error(String);

impl Error {
    fn from_draw<E: std::error::Error>(e: E) -> Self {
        Self(e.to_string())
    }
}

/// One of the three scalar series plotted against temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Density,
    SelfDiffusion,
    Viscosity,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [
        Quantity::Density,
        Quantity::SelfDiffusion,
        Quantity::Viscosity,
    ];

    pub fn axis_label(self) -> &'static str {
        match self {
            Quantity::Density => "Density",
            Quantity::SelfDiffusion => "Self-diffusion (D[H2O])",
            Quantity::Viscosity => "Viscosity",
        }
    }

    pub fn chart_file(self) -> &'static str {
        match self {
            Quantity::Density => "T_vs_density.png",
            Quantity::SelfDiffusion => "T_vs_selfdiff.png",
            Quantity::Viscosity => "T_vs_viscosity.png",
        }
    }

    fn value_of(self, point: &SweepPoint) -> f64 {
        match self {
            Quantity::Density => point.density,
            Quantity::SelfDiffusion => point.self_diffusion,
            Quantity::Viscosity => point.viscosity,
        }
    }
}

/// One fully-populated record flattened for charting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub temperature: u32,
    pub density: f64,
    pub self_diffusion: f64,
    pub viscosity: f64,
}

/// Groups fully-populated records by pressure, each group in ascending
/// temperature order. Partial records carry no plottable triple and are
/// left out.
pub fn pressure_series(
    records: &BTreeMap<ConditionKey, Measurements>,
) -> BTreeMap<u32, Vec<SweepPoint>> {
    let mut by_pressure: BTreeMap<u32, Vec<SweepPoint>> = BTreeMap::new();

    for (key, record) in records {
        let (Some(density), Some(self_diffusion), Some(viscosity)) =
            (record.density, record.self_diffusion, record.viscosity)
        else {
            continue;
        };
        by_pressure.entry(key.pressure).or_default().push(SweepPoint {
            temperature: key.temperature,
            density,
            self_diffusion,
            viscosity,
        });
    }

    for points in by_pressure.values_mut() {
        points.sort_by_key(|p| p.temperature);
    }
    by_pressure
}

/// Renders the three temperature-sweep charts into `out_dir` and returns
/// the files written. With no fully-populated record there is nothing to
/// draw and no file is produced.
pub fn sweep_charts(
    out_dir: &Path,
    records: &BTreeMap<ConditionKey, Measurements>,
) -> Result<Vec<PathBuf>, Error> {
    let series = pressure_series(records);
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let mut written = Vec::new();
    for quantity in Quantity::ALL {
        let path = out_dir.join(quantity.chart_file());
        draw_sweep(&path, quantity, &series)?;
        written.push(path);
    }
    Ok(written)
}

fn draw_sweep(
    path: &Path,
    quantity: Quantity,
    series: &BTreeMap<u32, Vec<SweepPoint>>,
) -> Result<(), Error> {
    let (t_range, y_range) = sweep_ranges(quantity, series);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::from_draw)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(t_range, y_range)
        .map_err(Error::from_draw)?;

    chart
        .configure_mesh()
        .x_desc("Temperature (K)")
        .y_desc(quantity.axis_label())
        .draw()
        .map_err(Error::from_draw)?;

    for (slot, (&pressure, points)) in series.iter().enumerate() {
        let color = Palette99::pick(slot);
        let xy: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (f64::from(p.temperature), quantity.value_of(p)))
            .collect();

        chart
            .draw_series(LineSeries::new(xy.iter().copied(), color.stroke_width(2)))
            .map_err(Error::from_draw)?
            .label(format!("P = {pressure} bar"))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], Palette99::pick(slot).stroke_width(2))
            });
        chart
            .draw_series(xy.iter().map(|&pt| Circle::new(pt, 4, color.filled())))
            .map_err(Error::from_draw)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(Error::from_draw)?;

    root.present().map_err(Error::from_draw)
}

/// Renders one averaged RDF curve with its three pair series.
pub fn rdf_chart(path: &Path, curve: &RdfCurve) -> Result<(), Error> {
    if curve.bins() == 0 {
        return Ok(());
    }

    let r_lo = curve.r.iter().copied().fold(f64::INFINITY, f64::min);
    let r_hi = curve.r.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let g_hi = curve
        .g_oo
        .iter()
        .chain(&curve.g_hh)
        .chain(&curve.g_oh)
        .copied()
        .fold(0.0_f64, f64::max);
    let y_hi = if g_hi > 0.0 { g_hi * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::from_draw)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(padded(r_lo, r_hi), 0.0..y_hi)
        .map_err(Error::from_draw)?;

    chart
        .configure_mesh()
        .x_desc("r (Å)")
        .y_desc("g(r)")
        .draw()
        .map_err(Error::from_draw)?;

    let pairs: [(&str, &[f64]); 3] = [
        ("O-O", &curve.g_oo),
        ("H-H", &curve.g_hh),
        ("O-H", &curve.g_oh),
    ];
    for (slot, (label, values)) in pairs.into_iter().enumerate() {
        let color = Palette99::pick(slot);
        chart
            .draw_series(LineSeries::new(
                curve.r.iter().copied().zip(values.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(Error::from_draw)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(Error::from_draw)?;

    root.present().map_err(Error::from_draw)
}

fn sweep_ranges(
    quantity: Quantity,
    series: &BTreeMap<u32, Vec<SweepPoint>>,
) -> (Range<f64>, Range<f64>) {
    let mut t_lo = f64::INFINITY;
    let mut t_hi = f64::NEG_INFINITY;
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;

    for point in series.values().flatten() {
        let t = f64::from(point.temperature);
        let y = quantity.value_of(point);
        t_lo = t_lo.min(t);
        t_hi = t_hi.max(t);
        y_lo = y_lo.min(y);
        y_hi = y_hi.max(y);
    }

    (padded(t_lo, t_hi), padded(y_lo, y_hi))
}

// Keeps degenerate (single-point) ranges drawable.
fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        lo.abs().max(1.0) * 0.05
    };
    (lo - pad)..(hi + pad)
}
