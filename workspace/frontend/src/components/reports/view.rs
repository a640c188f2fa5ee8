use common::ReportSource;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::widget::MonthlyReportWidget;
use crate::settings;

#[function_component(Reports)]
pub fn reports() -> Html {
    let source = use_state(|| settings::get_settings().report_source);

    let on_source_change = {
        let source = source.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ReportSource>() {
                Ok(next) => {
                    log::info!("Switching report source to {}", next);
                    settings::update_settings(|s| s.report_source = next);
                    if let Err(e) = settings::get_settings().save_report_source() {
                        log::warn!("Failed to persist report source: {:?}", e);
                    }
                    source.set(next);
                }
                Err(e) => log::warn!("Ignoring report source selection: {}", e),
            }
        })
    };

    html! {
        <>
            <div class="flex justify-end mb-4">
                <label class="form-control w-full max-w-xs">
                    <div class="label"><span class="label-text">{"Data source"}</span></div>
                    <select class="select select-bordered select-sm" onchange={on_source_change}>
                        <option value="legacy" selected={*source == ReportSource::Legacy}>{"Monthly category report"}</option>
                        <option value="enhanced" selected={*source == ReportSource::Enhanced}>{"Dashboard statistics"}</option>
                    </select>
                </label>
            </div>
            // Keyed so a source switch restarts polling from scratch
            <MonthlyReportWidget key={source.to_string()} source={*source} />
        </>
    }
}
