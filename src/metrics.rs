//! Pure derivation helpers over an employee snapshot.
//!
//! Views derive their presentation data (cards, chart series) from snapshots
//! through these functions; none of them touches the store.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// A labelled numeric value, the shape consumed by the chart layer for
/// bar/line axes and pie slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub name: String,
    pub value: u32,
}

/// The five fixed score ranges used for distribution reporting, in report
/// order. Bounds are inclusive and the ranges do not overlap.
pub const SCORE_RANGES: [(&str, u32, u32); 5] = [
    ("0-59", 0, 59),
    ("60-69", 60, 69),
    ("70-79", 70, 79),
    ("80-89", 80, 89),
    ("90-100", 90, 100),
];

/// Mean overall score across employees that have a performance record,
/// rounded to the nearest integer. 0 when none have one.
pub fn average_score(employees: &[Employee]) -> u32 {
    let scores: Vec<u32> = employees
        .iter()
        .filter_map(|employee| employee.performance.as_ref())
        .map(|record| record.overall_score)
        .collect();

    if scores.is_empty() {
        return 0;
    }

    let total: u32 = scores.iter().sum();
    (f64::from(total) / scores.len() as f64).round() as u32
}

/// Number of employees with an overall score of 90 or above.
pub fn top_performers(employees: &[Employee]) -> usize {
    employees
        .iter()
        .filter_map(|employee| employee.performance.as_ref())
        .filter(|record| record.overall_score >= 90)
        .count()
}

/// (employee name, overall score) pairs for employees with a performance
/// record, collection order preserved.
pub fn score_series(employees: &[Employee]) -> Vec<CategoryValue> {
    employees
        .iter()
        .filter_map(|employee| {
            employee.performance.as_ref().map(|record| CategoryValue {
                name: employee.name.clone(),
                value: record.overall_score,
            })
        })
        .collect()
}

/// Employee count per distinct department, one entry per department in
/// first-observed order.
pub fn department_distribution(employees: &[Employee]) -> Vec<CategoryValue> {
    let mut counts: Vec<CategoryValue> = Vec::new();
    for employee in employees {
        match counts
            .iter_mut()
            .find(|entry| entry.name == employee.department)
        {
            Some(entry) => entry.value += 1,
            None => counts.push(CategoryValue {
                name: employee.department.clone(),
                value: 1,
            }),
        }
    }
    counts
}

/// Employee count per fixed score range. An employee without a performance
/// record counts as score 0. Zero-count ranges are still reported, in the
/// fixed range order.
pub fn score_ranges(employees: &[Employee]) -> Vec<CategoryValue> {
    let mut buckets: Vec<CategoryValue> = SCORE_RANGES
        .iter()
        .map(|(label, _, _)| CategoryValue {
            name: (*label).to_string(),
            value: 0,
        })
        .collect();

    for employee in employees {
        let score = employee
            .performance
            .as_ref()
            .map(|record| record.overall_score)
            .unwrap_or(0);
        if let Some(index) = SCORE_RANGES
            .iter()
            .position(|(_, min, max)| score >= *min && score <= *max)
        {
            buckets[index].value += 1;
        }
    }

    buckets
}
