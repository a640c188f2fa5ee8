use common::{format_currency, format_magnitude, ReportSource, ReportSummary, ReportView, REPORT_REFRESH_INTERVAL};
use yew::prelude::*;

use super::charts::{CategoryBarChart, CategoryPieChart};
use super::table::CategoryTable;
use crate::api_client::report::get_monthly_report;
use crate::hooks::FetchState;
use crate::shared::error::ErrorPanel;
use crate::shared::fetch_hook::use_polling_fetch;
use crate::shared::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub source: ReportSource,
}

/// Current month's category sales, refreshed every few minutes while mounted.
#[function_component(MonthlyReportWidget)]
pub fn monthly_report_widget(props: &Props) -> Html {
    let source = props.source;
    let interval_ms = u32::try_from(REPORT_REFRESH_INTERVAL.as_millis()).unwrap_or(u32::MAX);

    let fetch_state = use_polling_fetch(
        move || async move {
            get_monthly_report(source)
                .await
                .map(|report| ReportView::build(&report))
        },
        interval_ms,
    );

    match &*fetch_state {
        FetchState::Loading => html! {
            <Loading text="Loading monthly report..." />
        },
        FetchState::Error(error) => html! {
            <ErrorPanel
                title="Failed to load the monthly report"
                message={error.clone()}
                retry_hint={Some(AttrValue::from(format!("Retrying every {} minutes.", interval_ms / 60_000)))}
            />
        },
        FetchState::Success(view) => render_view(view),
    }
}

fn render_view(view: &ReportView) -> Html {
    let header = render_summary(&view.summary);

    if view.is_empty() {
        return html! {
            <>
                {header}
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center py-12 opacity-70">
                        <i class="fas fa-chart-bar text-4xl mb-2"></i>
                        <p>{"No category sales recorded this month yet."}</p>
                    </div>
                </div>
            </>
        };
    }

    let projections = &view.projections;
    html! {
        <>
            {header}
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Units Sold by Category"}</h3>
                        <CategoryBarChart categories={projections.bar.clone()} ticks={view.bar_axis_ticks()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Share of Volume"}</h3>
                        <CategoryPieChart categories={projections.pie.clone()} shares={view.pie_shares()} />
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Top Categories"}</h3>
                    <CategoryTable categories={projections.table.clone()} />
                </div>
            </div>
        </>
    }
}

fn render_summary(summary: &ReportSummary) -> Html {
    let revenue_hint = if summary.revenue_is_authoritative { "reported" } else { "summed" };
    let progress = summary.month_progress();

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <h2 class="card-title">{summary.period_label()}</h2>
                    <div class="flex flex-wrap gap-2">
                        <span class="badge badge-primary badge-lg">
                            {format!("{} units", format_magnitude(summary.total_units as f64))}
                        </span>
                        <span class="badge badge-success badge-lg" title={revenue_hint}>
                            {format_currency(summary.total_revenue)}
                        </span>
                        <span class="badge badge-ghost badge-lg">
                            {format!("{} categories", summary.category_count)}
                        </span>
                    </div>
                </div>
                <div class="flex items-center gap-3 text-sm opacity-70">
                    <span>{format!("Day {} of {}", summary.days_elapsed, summary.total_days)}</span>
                    <progress class="progress progress-primary w-48" value={format!("{:.0}", progress)} max="100"></progress>
                </div>
            </div>
        </div>
    }
}
