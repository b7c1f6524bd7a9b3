//! Chart option building - a configuration layer, not a renderer.
//!
//! Builds the option object handed to an ECharts-compatible renderer from
//! labelled values derived by the metrics helpers. Rendering itself stays
//! with the external library.

use serde_json::{json, Value};

use crate::employee::PerformanceCategory;
use crate::metrics::CategoryValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Radar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
        }
    }
}

/// Builds the option object for a titled chart over labelled values.
///
/// Bar and line charts place names on a category axis with a parallel value
/// series (lines are smoothed). Pie charts take the values as named slices.
/// A radar chart over plain values treats each value as a score out of 100;
/// use [`radar_options`] when real category maxima are available.
pub fn chart_options(kind: ChartKind, title: &str, categories: &[CategoryValue]) -> Value {
    match kind {
        ChartKind::Pie => json!({
            "title": { "text": title, "left": "center" },
            "tooltip": { "trigger": "item" },
            "legend": { "bottom": 0 },
            "series": [{
                "type": "pie",
                "radius": "60%",
                "data": categories,
                "emphasis": {
                    "itemStyle": {
                        "shadowBlur": 10,
                        "shadowOffsetX": 0,
                        "shadowColor": "rgba(0, 0, 0, 0.3)"
                    }
                }
            }]
        }),
        ChartKind::Radar => {
            let indicators: Vec<Value> = categories
                .iter()
                .map(|category| json!({ "name": category.name, "max": 100 }))
                .collect();
            let values: Vec<u32> = categories.iter().map(|category| category.value).collect();
            json!({
                "title": { "text": title, "left": "center" },
                "tooltip": {},
                "radar": { "indicator": indicators },
                "series": [{
                    "type": "radar",
                    "data": [{ "value": values, "name": title }]
                }]
            })
        }
        ChartKind::Bar | ChartKind::Line => {
            let labels: Vec<&str> = categories
                .iter()
                .map(|category| category.name.as_str())
                .collect();
            let values: Vec<u32> = categories.iter().map(|category| category.value).collect();
            json!({
                "title": { "text": title, "left": "center" },
                "tooltip": { "trigger": "axis" },
                "xAxis": { "type": "category", "data": labels },
                "yAxis": { "type": "value" },
                "series": [{
                    "type": kind.as_str(),
                    "data": values,
                    "smooth": kind == ChartKind::Line
                }]
            })
        }
    }
}

/// Builds radar options from one employee's review categories: indicators
/// from the category names and maxima, one data series of scores. A zero
/// maximum falls back to 100 so the indicator stays drawable.
pub fn radar_options(title: &str, categories: &[PerformanceCategory]) -> Value {
    let indicators: Vec<Value> = categories
        .iter()
        .map(|category| {
            let max = if category.max_score == 0 {
                100
            } else {
                category.max_score
            };
            json!({ "name": category.name, "max": max })
        })
        .collect();
    let values: Vec<u32> = categories.iter().map(|category| category.score).collect();

    json!({
        "title": { "text": title, "left": "center" },
        "tooltip": {},
        "radar": { "indicator": indicators },
        "series": [{
            "type": "radar",
            "data": [{ "value": values, "name": title }]
        }]
    })
}
