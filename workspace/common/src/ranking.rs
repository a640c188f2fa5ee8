//! Ranking of category aggregates into the chart and table projections of
//! the monthly report.
//!
//! All three projections share one ordering: units sold, descending, with
//! ties kept in the order the backend sent them. Revenue is carried along
//! but never used as a key.

use crate::report::CategoryAggregate;

/// Fixed chart palette, assigned by rank position.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6",
    "#ec4899", "#14b8a6", "#f97316", "#6366f1", "#84cc16",
];

pub const BAR_LIMIT: usize = 8;
pub const BAR_LABEL_CHARS: usize = 12;
pub const PIE_LIMIT: usize = 6;
pub const PIE_LABEL_CHARS: usize = 15;
pub const TABLE_LIMIT: usize = 10;

const ELLIPSIS: &str = "...";

/// Colour for the category at `rank` (0-based); cycles every 10 ranks.
pub fn palette_color(rank: usize) -> &'static str {
    PALETTE[rank % PALETTE.len()]
}

/// Shortens `name` to `max_chars` characters plus `...` when it is longer.
pub fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let mut label: String = name.chars().take(max_chars).collect();
    label.push_str(ELLIPSIS);
    label
}

/// A category placed at a rank in one projection.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCategory {
    pub rank: usize,
    pub category: String,
    /// Display name, possibly truncated
    pub label: String,
    pub units_sold: u64,
    pub revenue: f64,
    pub product_count: Option<u64>,
    pub color: &'static str,
}

/// The three derived views of one report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryProjections {
    /// Top 8, labels cut at 12 characters
    pub bar: Vec<RankedCategory>,
    /// Top 6, labels cut at 15 characters
    pub pie: Vec<RankedCategory>,
    /// Top 10, full names
    pub table: Vec<RankedCategory>,
}

impl CategoryProjections {
    pub fn is_empty(&self) -> bool {
        self.bar.is_empty() && self.pie.is_empty() && self.table.is_empty()
    }
}

fn sorted_by_volume(aggregates: &[CategoryAggregate]) -> Vec<&CategoryAggregate> {
    let mut sorted: Vec<&CategoryAggregate> = aggregates.iter().collect();
    // sort_by is stable, so equal volumes keep their input order
    sorted.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    sorted
}

fn project(sorted: &[&CategoryAggregate], limit: usize, label_chars: Option<usize>) -> Vec<RankedCategory> {
    sorted
        .iter()
        .take(limit)
        .enumerate()
        .map(|(rank, aggregate)| RankedCategory {
            rank,
            category: aggregate.category.clone(),
            label: match label_chars {
                Some(max) => truncate_label(&aggregate.category, max),
                None => aggregate.category.clone(),
            },
            units_sold: aggregate.units_sold,
            revenue: aggregate.revenue,
            product_count: aggregate.product_count,
            color: palette_color(rank),
        })
        .collect()
}

/// Builds the bar, pie and table projections. The input is left untouched.
pub fn rank_categories(aggregates: &[CategoryAggregate]) -> CategoryProjections {
    let sorted = sorted_by_volume(aggregates);

    CategoryProjections {
        bar: project(&sorted, BAR_LIMIT, Some(BAR_LABEL_CHARS)),
        pie: project(&sorted, PIE_LIMIT, Some(PIE_LABEL_CHARS)),
        table: project(&sorted, TABLE_LIMIT, None),
    }
}
