use yew::prelude::*;

use super::layout::DRAWER_ID;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let api = settings::get_settings().api_base_url();

    html! {
        <header class="navbar bg-base-100 shadow-sm sticky top-0 z-40 gap-2">
            <label aria-label="open sidebar" class="btn btn-square btn-ghost lg:hidden" for={DRAWER_ID}>
                <i class="fas fa-bars text-xl"></i>
            </label>
            <h1 class="flex-1 text-xl font-bold px-2">{&props.title}</h1>
            <span class="badge badge-ghost hidden md:inline-flex font-mono text-xs" title="API endpoint">
                {api}
            </span>
        </header>
    }
}
