use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod shared;

use components::inventory_logs::InventoryLogs;
use components::layout::layout::Layout;
use components::reports::Reports;
use shared::toast::ToastProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/inventory-logs")]
    InventoryLogs,
    #[at("/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::InventoryLogs => {
            log::trace!("Rendering Inventory Logs page");
            html! { <Layout title="Inventory Logs"><InventoryLogs /></Layout> }
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            html! { <Layout title="Monthly Report"><Reports /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Stockboard Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
