//! Plain-text rendering of catalog, log pages and reports.

use chrono::Utc;
use common::{
    classify_movement, format_currency, format_magnitude, InventoryLogPage, MovementKind, Product,
    RankedCategory, ReportSource, ReportView,
};

const BAR_WIDTH: usize = 40;

pub fn products_table(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products match.\n".to_string();
    }

    let mut out = format!("{:>6}  {:<14} {:<32} {:<16} {:>8}\n", "ID", "SKU", "NAME", "CATEGORY", "STOCK");
    for product in products {
        let marker = if product.is_low_stock() { " !" } else { "" };
        out.push_str(&format!(
            "{:>6}  {:<14} {:<32} {:<16} {:>8}{}\n",
            product.id, product.sku, product.name, product.category, product.stock, marker
        ));
    }
    out.push_str(&format!("{} product(s); ! marks stock at or below minimum\n", products.len()));
    out
}

/// One page of movements for `product`, newest first as served.
pub fn log_page(product: &Product, page: &InventoryLogPage) -> String {
    let mut out = format!(
        "{} (stock {}, min {})\n",
        product.display_label(),
        product.stock,
        product.min_stock
    );

    if page.logs.is_empty() {
        out.push_str("No inventory movements recorded.\n");
    }

    for entry in &page.logs {
        let descriptor = classify_movement(entry.log_type.as_deref());
        let kind = match (descriptor.kind, entry.log_type.as_deref()) {
            (MovementKind::Other, Some(raw)) if !raw.trim().is_empty() => raw.to_string(),
            (kind, _) => kind.label().to_string(),
        };
        out.push_str(&format!(
            "{} {:>7}  {:<12} {:>6} -> {:<6}  {}",
            entry.direction().arrow(),
            entry.formatted_delta(),
            kind,
            entry.balance_before,
            entry.balance_after,
            entry.formatted_created_at(&Utc, "%Y-%m-%d %H:%M"),
        ));
        for extra in [&entry.reference, &entry.condition, &entry.reason].into_iter().flatten() {
            if !extra.is_empty() {
                out.push_str(&format!("  {}", extra));
            }
        }
        out.push('\n');
    }

    let pagination = page.pagination.normalized();
    let window: Vec<String> = pagination
        .page_window(5)
        .into_iter()
        .map(|slot| match slot {
            Some(p) if p == pagination.current_page => format!("[{}]", p),
            Some(p) => p.to_string(),
            None => "...".to_string(),
        })
        .collect();
    out.push_str(&format!(
        "Page {} of {} ({} movements)  {}",
        pagination.current_page,
        pagination.total_pages,
        pagination.total_items,
        window.join(" ")
    ));
    if pagination.has_previous() {
        out.push_str(&format!("  --page {} for newer", pagination.current_page - 1));
    }
    if pagination.has_next() {
        out.push_str(&format!("  --page {} for older", pagination.current_page + 1));
    }
    out.push('\n');
    out
}

pub fn report(view: &ReportView, source: ReportSource) -> String {
    let summary = &view.summary;
    let revenue_hint = if summary.revenue_is_authoritative { "reported" } else { "summed" };

    let mut out = format!(
        "{} ({} source), day {} of {} ({:.0}%)\n",
        summary.period_label(),
        source,
        summary.days_elapsed,
        summary.total_days,
        summary.month_progress()
    );
    out.push_str(&format!(
        "Units sold: {}   Revenue: {} ({})   Categories: {}\n",
        format_magnitude(summary.total_units as f64),
        format_currency(summary.total_revenue),
        revenue_hint,
        summary.category_count
    ));

    if view.is_empty() {
        out.push_str("\nNo category sales recorded this month yet.\n");
        return out;
    }

    out.push_str("\nUnits sold by category\n");
    out.push_str(&bars(&view.projections.bar, &view.bar_axis_ticks()));

    out.push_str("\nShare of volume\n");
    for (category, share) in view.projections.pie.iter().zip(view.pie_shares()) {
        out.push_str(&format!("  {:<15} {:>5.1}%\n", category.label, share));
    }

    out.push_str(&format!(
        "\n{:>3}  {:<24} {:>10} {:>14} {:>9}\n",
        "#", "CATEGORY", "UNITS", "REVENUE", "PRODUCTS"
    ));
    for row in &view.projections.table {
        out.push_str(&format!(
            "{:>3}  {:<24} {:>10} {:>14} {:>9}\n",
            row.rank + 1,
            row.category,
            row.units_sold,
            format_currency(row.revenue),
            row.product_count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
        ));
    }
    out
}

/// Horizontal bars scaled to the last axis tick, followed by the axis labels.
fn bars(categories: &[RankedCategory], ticks: &[f64]) -> String {
    let scale = ticks.last().copied().filter(|t| *t > 0.0).unwrap_or(1.0);
    let mut out = String::new();
    for category in categories {
        let filled = ((category.units_sold as f64 / scale) * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "  {:<12} {:<width$} {}\n",
            category.label,
            "#".repeat(filled.min(BAR_WIDTH)),
            format_magnitude(category.units_sold as f64),
            width = BAR_WIDTH
        ));
    }
    let axis: Vec<String> = ticks.iter().map(|t| format_magnitude(*t)).collect();
    out.push_str(&format!("  {:<12} {}\n", "", axis.join(" | ")));
    out
}
