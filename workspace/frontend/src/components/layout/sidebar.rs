use yew::prelude::*;
use yew_router::prelude::*;

use super::layout::DRAWER_ID;
use crate::Route;

fn nav_item(route: Route, current: Option<&Route>, icon: &'static str, label: &'static str) -> Html {
    let active = match (current, &route) {
        (Some(Route::Home), Route::InventoryLogs) => true,
        (Some(current), route) => current == route,
        (None, _) => false,
    };
    html! {
        <li>
            <Link<Route> to={route} classes={classes!(active.then_some("active"))}>
                <i class={classes!(icon, "w-5")}></i>
                {label}
            </Link<Route>>
        </li>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for={DRAWER_ID}></label>
            <ul class="menu p-4 w-64 min-h-full bg-base-100 border-r border-base-300">
                <li class="menu-title flex-row items-center gap-2 text-lg">
                    <i class="fas fa-boxes text-primary"></i>
                    {"Stockboard"}
                </li>
                { nav_item(Route::InventoryLogs, current.as_ref(), "fas fa-history", "Inventory Logs") }
                { nav_item(Route::Reports, current.as_ref(), "fas fa-chart-bar", "Monthly Report") }
            </ul>
        </div>
    }
}
