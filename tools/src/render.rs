//! Rendering sink: SVG snapshots, per-scenario SEIR charts, the
//! comparative Infected chart and a JSON dump of the results.
//!
//! Every artifact lands under one output directory. File names:
//!   grid_{scenario}_step_{step}.svg
//!   seir_{scenario}.svg
//!   comparative_infected.svg
//!   results.json

use anyhow::{Context, Result};
use ca_seir_core::{
    error::{SimError, SimResult},
    event::{EventSink, SimEvent},
    grid::CellState,
    results::{ScenarioResult, SimResults},
    snapshot::GridSnapshot,
    types::Step,
};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

pub const COMPARATIVE_FILE: &str = "comparative_infected.svg";
pub const RESULTS_FILE: &str = "results.json";

/// S blue, E orange, I red, R green; indexed by `CellState::index`.
const PALETTE: [RGBColor; 4] = [
    RGBColor(0, 0, 255),
    RGBColor(255, 165, 0),
    RGBColor(255, 0, 0),
    RGBColor(0, 128, 0),
];

fn state_color(state: CellState) -> RGBColor {
    PALETTE[state.index()]
}

/// "Cenario_1_Beta_010" -> "Cenario 1 Beta 010".
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Comparative legend label: "Cenario 1 β = 010".
pub fn comparative_label(name: &str) -> String {
    display_name(name).replace("Beta", "β =")
}

pub struct ArtifactWriter {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl ArtifactWriter {
    /// Creates the output directory if absent.
    pub fn create(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("Cannot create output directory {}", out_dir.display()))?;
        Ok(Self { out_dir, written: Vec::new() })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn snapshot_path(&self, scenario: &str, step: Step) -> PathBuf {
        self.out_dir.join(format!("grid_{scenario}_step_{step}.svg"))
    }

    pub fn seir_chart_path(&self, scenario: &str) -> PathBuf {
        self.out_dir.join(format!("seir_{scenario}.svg"))
    }

    pub fn write_snapshot(&mut self, snap: &GridSnapshot) -> Result<PathBuf> {
        let path = self.snapshot_path(&snap.scenario, snap.step);
        draw_snapshot(&path, snap)
            .with_context(|| format!("Cannot render {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        self.written.push(path.clone());
        Ok(path)
    }

    /// One chart per scenario with all four compartments.
    pub fn write_seir_charts(&mut self, results: &SimResults) -> Result<()> {
        for result in results.iter() {
            let path = self.seir_chart_path(&result.name);
            draw_seir_chart(&path, result)
                .with_context(|| format!("Cannot render {}", path.display()))?;
            log::debug!("wrote {}", path.display());
            self.written.push(path);
        }
        Ok(())
    }

    /// Infected curves of every scenario on one chart.
    pub fn write_comparative(&mut self, results: &SimResults) -> Result<()> {
        let path = self.out_dir.join(COMPARATIVE_FILE);
        draw_comparative(&path, results)
            .with_context(|| format!("Cannot render {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }

    pub fn write_results_json(&mut self, results: &SimResults) -> Result<()> {
        let path = self.out_dir.join(RESULTS_FILE);
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Cannot write {}", path.display()))?;
        self.written.push(path);
        Ok(())
    }
}

impl EventSink for ArtifactWriter {
    fn emit(&mut self, event: SimEvent) -> SimResult<()> {
        match event {
            SimEvent::SnapshotCaptured(snap) => self
                .write_snapshot(&snap)
                .map(|_| ())
                .map_err(SimError::from),
            other => {
                log::trace!("render: ignoring {}", other.type_name());
                Ok(())
            }
        }
    }
}

fn draw_snapshot(path: &Path, snap: &GridSnapshot) -> Result<()> {
    let n = snap.grid.size() as i32;
    let root = SVGBackend::new(path, (720, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Spatial evolution - {} - step {}", display_name(&snap.scenario), snap.step),
            ("sans-serif", 18),
        )
        .margin(10)
        .build_cartesian_2d(0..n + n / 4, 0..n)?;

    // Row x is drawn top-down, column y left-right.
    for state in CellState::ALL {
        let color = state_color(state);
        chart
            .draw_series(
                snap.grid
                    .rows()
                    .enumerate()
                    .flat_map(move |(x, row)| {
                        row.iter()
                            .enumerate()
                            .filter(move |&(_, &s)| s == state)
                            .map(move |(y, _)| (x as i32, y as i32))
                    })
                    .map(move |(x, y)| {
                        Rectangle::new([(y, n - 1 - x), (y + 1, n - x)], color.filled())
                    }),
            )?
            .label(format!("{} ({})", state.name(), state.label()))
            .legend(move |(lx, ly)| Rectangle::new([(lx, ly - 5), (lx + 10, ly + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_seir_chart(path: &Path, result: &ScenarioResult) -> Result<()> {
    let steps = result.counts.len().max(1) as i32;
    let y_max = result.counts.first().map_or(1, |c| c.total()).max(1) as i32;

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("SEIR evolution - {}", display_name(&result.name)), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..steps, 0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (steps)")
        .y_desc("Number of cells")
        .draw()?;

    for state in CellState::ALL {
        let color = state_color(state);
        chart
            .draw_series(LineSeries::new(
                result
                    .counts
                    .iter()
                    .enumerate()
                    .map(move |(step, c)| (step as i32, c.get(state) as i32)),
                color.stroke_width(2),
            ))?
            .label(state.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_comparative(path: &Path, results: &SimResults) -> Result<()> {
    let steps = results.iter().map(|r| r.counts.len()).max().unwrap_or(0).max(1) as i32;
    let y_max = results
        .iter()
        .map(|r| r.peak_infected().1)
        .max()
        .unwrap_or(0)
        .max(1) as i32;

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Infected curves across scenarios", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..steps, 0..y_max + y_max / 10 + 1)?;

    chart
        .configure_mesh()
        .x_desc("Time (steps)")
        .y_desc("Number of infected")
        .draw()?;

    for (i, result) in results.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                result
                    .infected_series()
                    .into_iter()
                    .enumerate()
                    .map(|(step, infected)| (step as i32, infected as i32)),
                color.stroke_width(2),
            ))?
            .label(comparative_label(&result.name))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
