use std::rc::Rc;

use common::{ApplyOutcome, LoadStatus, LogViewerAction, LogViewerState, Product};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::log_list::LogList;
use super::product_picker::ProductPicker;
use crate::api_client::inventory_log::get_inventory_logs;
use crate::api_client::product::get_products;
use crate::components::pagination::Pagination;
use crate::shared::error::ErrorPanel;
use crate::shared::loading::{Loading, RefreshIndicator};
use crate::shared::toast::ToastContext;

/// Yew adapter around the shared log viewer state machine.
///
/// Ignored and stale actions hand back the same `Rc`, so they never trigger
/// a re-render.
#[derive(Default, PartialEq)]
struct LogViewerStore(LogViewerState);

impl Reducible for LogViewerStore {
    type Action = LogViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match next.apply(action) {
            ApplyOutcome::Applied => Rc::new(LogViewerStore(next)),
            ApplyOutcome::Ignored => self,
            ApplyOutcome::Stale => {
                log::debug!("Discarded stale inventory log response");
                self
            }
        }
    }
}

fn notify_error(toast_ctx: &Option<ToastContext>, message: String) {
    match toast_ctx {
        Some(ctx) => ctx.show_error(message),
        None => log::error!("{}", message),
    }
}

fn notify_warning(toast_ctx: &Option<ToastContext>, message: String) {
    match toast_ctx {
        Some(ctx) => ctx.show_warning(message),
        None => log::warn!("{}", message),
    }
}

#[function_component(InventoryLogs)]
pub fn inventory_logs() -> Html {
    let store = use_reducer(LogViewerStore::default);
    let toast_ctx = use_context::<ToastContext>();
    let state = &store.0;

    // Catalog on mount
    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(LogViewerAction::CatalogRequested);
            spawn_local(async move {
                match get_products().await {
                    Ok(products) => dispatcher.dispatch(LogViewerAction::CatalogLoaded(products)),
                    Err(err) => dispatcher.dispatch(LogViewerAction::CatalogFailed(err)),
                }
            });
            || ()
        });
    }

    // Every new pending request gets exactly one fetch; the state machine
    // fences whatever comes back.
    {
        let dispatcher = store.dispatcher();
        use_effect_with(state.pending_request(), move |pending| {
            if let Some(request) = *pending {
                spawn_local(async move {
                    let action = match get_inventory_logs(request).await {
                        Ok(page) => LogViewerAction::LogsLoaded { request, page },
                        Err(error) => LogViewerAction::LogsFailed { request, error },
                    };
                    dispatcher.dispatch(action);
                });
            }
            || ()
        });
    }

    {
        let toast_ctx = toast_ctx.clone();
        let catalog_empty = state.catalog().is_empty();
        use_effect_with((state.catalog_status().clone(), catalog_empty), move |(status, empty)| {
            match status {
                LoadStatus::Failed(err) => notify_error(&toast_ctx, format!("Failed to load products: {}", err)),
                LoadStatus::Loaded if *empty => notify_warning(&toast_ctx, "No products found".to_string()),
                _ => {}
            }
            || ()
        });
    }

    {
        let toast_ctx = toast_ctx.clone();
        use_effect_with(state.logs_status().clone(), move |status| {
            if let LoadStatus::Failed(err) = status {
                notify_error(&toast_ctx, format!("Failed to load inventory logs: {}", err));
            }
            || ()
        });
    }

    let on_filter = {
        let dispatcher = store.dispatcher();
        Callback::from(move |filter: String| dispatcher.dispatch(LogViewerAction::SetFilter(filter)))
    };

    let on_select = {
        let dispatcher = store.dispatcher();
        Callback::from(move |product_id: Option<i64>| {
            dispatcher.dispatch(LogViewerAction::SelectProduct(product_id))
        })
    };

    let on_page_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |page: u32| dispatcher.dispatch(LogViewerAction::GoToPage(page)))
    };

    let on_previous = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LogViewerAction::PreviousPage))
    };

    let on_next = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LogViewerAction::NextPage))
    };

    let on_refresh = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(LogViewerAction::Refresh))
    };

    let selected = state.selected_product().cloned();
    let mut options: Vec<Product> = state.filtered_products().into_iter().cloned().collect();
    if let Some(product) = &selected {
        if !options.iter().any(|p| p.id == product.id) {
            options.insert(0, product.clone());
        }
    }

    let logs_loading = state.logs_status().is_loading();

    let body = if state.selected().is_none() {
        html! {
            <div class="alert mt-4">
                <i class="fas fa-info-circle"></i>
                <span>{"Select a product to view its stock movements."}</span>
            </div>
        }
    } else if state.entries().is_empty() && logs_loading {
        html! { <Loading text="Loading inventory logs..." /> }
    } else if let Some(message) = state.unrecovered_error() {
        html! {
            <div class="mt-4">
                <ErrorPanel
                    title="Could not load inventory logs"
                    message={message.to_string()}
                    retry_hint={Some(AttrValue::from("Use Refresh to try again."))}
                />
            </div>
        }
    } else if state.entries().is_empty() {
        html! {
            <div class="text-center py-10 opacity-60">
                <i class="fas fa-box-open text-3xl mb-2"></i>
                <p>{"No inventory movements recorded for this product."}</p>
            </div>
        }
    } else {
        html! {
            <div class="mt-4">
                <LogList entries={state.entries().to_vec()} />
                { if let Some(info) = state.pagination() {
                    html! {
                        <Pagination
                            info={*info}
                            current_page={state.page()}
                            can_go_previous={state.can_go_previous()}
                            can_go_next={state.can_go_next()}
                            disabled={logs_loading}
                            on_previous={on_previous}
                            on_next={on_next}
                            on_page_change={on_page_change}
                        />
                    }
                } else {
                    html! {}
                }}
            </div>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">
                        {"Inventory Movements"}
                        <RefreshIndicator active={logs_loading && !state.entries().is_empty()} />
                    </h2>
                    <button
                        class="btn btn-sm btn-ghost"
                        onclick={on_refresh}
                        disabled={state.selected().is_none() || logs_loading}
                    >
                        <i class="fas fa-sync-alt"></i>
                        {" Refresh"}
                    </button>
                </div>
                <ProductPicker
                    products={options}
                    filter={state.filter().to_string()}
                    selected={selected}
                    loading={state.catalog_status().is_loading()}
                    on_filter={on_filter}
                    on_select={on_select}
                />
                {body}
            </div>
        </div>
    }
}
