use yew::prelude::*;

use super::navbar::Navbar;
use super::sidebar::Sidebar;

pub const DRAWER_ID: &str = "app-drawer";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

/// Drawer shell shared by every page.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <Navbar title={props.title.clone()} />
                <main class="flex-1 p-4 md:p-6 max-w-7xl w-full mx-auto">
                    { props.children.clone() }
                </main>
            </div>
            <Sidebar />
        </div>
    }
}
