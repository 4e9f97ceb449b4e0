//! Line chart configuration and the lifetime of the two chart instances.
//!
//! [`LineChartConfig`] serializes to the option object Chart.js expects for a
//! `type: 'line'` chart. The chart library itself sits behind
//! [`ChartBackend`]; a live instance is a boxed [`ChartHandle`].

use asymptote_common::{input_sizes, space_trendline, trendline, ComplexityTriple, Trendline};
use serde::Serialize;

use crate::error::UiError;
use crate::page::{ids, COMPACT_VIEWPORT_PX};

/// Which of the two charts on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Time,
    Space,
}

impl ChartKind {
    pub fn canvas_id(&self) -> &'static str {
        match self {
            Self::Time => ids::TIME_COMPLEXITY_CHART,
            Self::Space => ids::SPACE_COMPLEXITY_CHART,
        }
    }

    pub fn y_axis_title(&self) -> &'static str {
        match self {
            Self::Time => "Time Complexity",
            Self::Space => "Space Complexity",
        }
    }

    fn series(&self, label: &str) -> Trendline {
        match self {
            Self::Time => trendline(label),
            Self::Space => space_trendline(label),
        }
    }
}

/// Font sizes, picked once when a chart is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPreset {
    pub title: u8,
    pub ticks: u8,
    pub legend: u8,
}

impl FontPreset {
    pub const COMPACT: Self = Self { title: 12, ticks: 10, legend: 10 };
    pub const REGULAR: Self = Self { title: 14, ticks: 12, legend: 12 };

    pub fn for_viewport(width: f64) -> Self {
        if width < COMPACT_VIEWPORT_PX {
            Self::COMPACT
        } else {
            Self::REGULAR
        }
    }
}

// ── Chart.js option shape ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<u64>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Trendline,
    pub border_color: &'static str,
    pub border_width: u8,
    pub point_radius: u8,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub font: Font,
}

impl LineChartConfig {
    /// Best (green), average (blue) and worst (red) case trendlines for one
    /// resource, with fonts sized for `viewport_width`.
    pub fn for_complexity(kind: ChartKind, complexity: &ComplexityTriple, viewport_width: f64) -> Self {
        let fonts = FontPreset::for_viewport(viewport_width);
        let dataset = |label, case: &str, color| Dataset {
            label,
            data: kind.series(case),
            border_color: color,
            border_width: 2,
            point_radius: 3,
            fill: false,
        };
        let axis = |text| Axis {
            title: AxisTitle { display: true, text, font: Font { size: fonts.title } },
            ticks: Ticks { font: Font { size: fonts.ticks } },
        };

        Self {
            chart_type: "line",
            data: ChartData {
                labels: input_sizes().collect(),
                datasets: vec![
                    dataset("Best Case", &complexity.best_case, "green"),
                    dataset("Average Case", &complexity.average_case, "blue"),
                    dataset("Worst Case", &complexity.worst_case, "red"),
                ],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: Scales {
                    x: axis("Input Size (n)"),
                    y: axis(kind.y_axis_title()),
                },
                plugins: Plugins {
                    legend: Legend {
                        labels: LegendLabels { font: Font { size: fonts.legend } },
                    },
                },
            },
        }
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }
}

// ── Chart instances ───────────────────────────────────────────────────────────

/// A live chart bound to a canvas.
pub trait ChartHandle {
    /// Re-fit to the canvas' current size. Data and fonts are untouched.
    fn resize(&self);

    /// Release the rendering context. The handle is gone afterwards.
    fn destroy(self: Box<Self>);
}

pub trait ChartBackend {
    fn create(
        &mut self,
        canvas_id: &str,
        config: &LineChartConfig,
    ) -> Result<Box<dyn ChartHandle>, UiError>;
}

/// Owner of at most one live chart for a canvas.
///
/// Empty until the first successful analysis; every later analysis destroys
/// the live chart before creating its replacement.
pub struct ChartSlot {
    kind: ChartKind,
    handle: Option<Box<dyn ChartHandle>>,
}

impl ChartSlot {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, handle: None }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Destroy the current chart (if any), then create one from `config`.
    /// If creation fails the slot is left empty.
    pub fn replace(
        &mut self,
        backend: &mut dyn ChartBackend,
        config: &LineChartConfig,
    ) -> Result<(), UiError> {
        if let Some(old) = self.handle.take() {
            old.destroy();
        }
        self.handle = Some(backend.create(self.kind.canvas_id(), config)?);
        Ok(())
    }

    pub fn resize(&self) {
        if let Some(handle) = &self.handle {
            handle.resize();
        }
    }
}

impl std::fmt::Debug for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartSlot")
            .field("kind", &self.kind)
            .field("live", &self.is_live())
            .finish()
    }
}
