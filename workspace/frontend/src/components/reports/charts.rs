use common::{format_magnitude, RankedCategory};
use plotly::common::{Marker, Orientation, TickMode};
use plotly::layout::{Axis, Margin};
use plotly::{Bar, Layout};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Serialize to JSON and parse back as a plain JS object
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn plot(div_id: &str, traces: Vec<JsValue>, layout: JsValue) -> Result<(), String> {
    let data = js_sys::Array::new();
    for trace in traces {
        data.push(&trace);
    }
    let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;
    newPlot(div_id, data.into(), layout, config);
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    /// Already ranked, highest volume first
    pub categories: Vec<RankedCategory>,
    pub ticks: Vec<f64>,
}

/// Horizontal bar chart of units sold per category.
#[function_component(CategoryBarChart)]
pub fn category_bar_chart(props: &BarChartProps) -> Html {
    let container_ref = use_node_ref();
    let div_id = "report-category-bars";

    use_effect_with(
        (container_ref.clone(), props.categories.clone(), props.ticks.clone()),
        move |(container_ref, categories, ticks)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                // Plotly draws the first category at the bottom
                let ordered: Vec<&RankedCategory> = categories.iter().rev().collect();
                let labels: Vec<String> = ordered.iter().map(|c| c.label.clone()).collect();
                let units: Vec<u64> = ordered.iter().map(|c| c.units_sold).collect();
                let colors: Vec<&'static str> = ordered.iter().map(|c| c.color).collect();
                let tick_text: Vec<String> = ticks.iter().map(|t| format_magnitude(*t)).collect();

                let trace = Bar::new(units, labels)
                    .orientation(Orientation::Horizontal)
                    .name("Units sold")
                    .marker(Marker::new().color_array(colors));

                let layout = Layout::new()
                    .height(320)
                    .show_legend(false)
                    .margin(Margin::new().left(110).right(10).top(10).bottom(30))
                    .paper_background_color("rgba(0,0,0,0)")
                    .plot_background_color("rgba(0,0,0,0)")
                    .x_axis(
                        Axis::new()
                            .tick_mode(TickMode::Array)
                            .tick_values(ticks.clone())
                            .tick_text(tick_text),
                    );

                let result = to_js(&trace).and_then(|trace| {
                    let layout = to_js(&layout)?;
                    plot(div_id, vec![trace], layout)
                });
                if let Err(e) = result {
                    log::error!("Failed to render category bar chart: {}", e);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:320px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub categories: Vec<RankedCategory>,
    /// Percent per slice, same order as `categories`
    pub shares: Vec<f64>,
}

/// Donut chart of the share of units sold.
#[function_component(CategoryPieChart)]
pub fn category_pie_chart(props: &PieChartProps) -> Html {
    let container_ref = use_node_ref();
    let div_id = "report-category-share";

    use_effect_with(
        (container_ref.clone(), props.categories.clone(), props.shares.clone()),
        move |(container_ref, categories, shares)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
                let values: Vec<u64> = categories.iter().map(|c| c.units_sold).collect();
                let colors: Vec<&str> = categories.iter().map(|c| c.color).collect();
                let text: Vec<String> = shares.iter().map(|s| format!("{:.1}%", s)).collect();

                let trace = serde_json::json!({
                    "type": "pie",
                    "hole": 0.45,
                    "labels": labels,
                    "values": values,
                    "text": text,
                    "textinfo": "text",
                    "hovertemplate": "%{label}: %{value} units<extra></extra>",
                    "marker": {"colors": colors},
                    "sort": false
                });

                let layout = serde_json::json!({
                    "height": 320,
                    "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "showlegend": true,
                    "legend": {"orientation": "h", "y": -0.1}
                });

                let result = to_js(&trace).and_then(|trace| {
                    let layout = to_js(&layout)?;
                    plot(div_id, vec![trace], layout)
                });
                if let Err(e) = result {
                    log::error!("Failed to render category share chart: {}", e);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:320px;"></div>
    }
}
