use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub text: AttrValue,
}

/// Block placeholder shown while a panel has nothing to render yet
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center gap-3 py-12 opacity-70">
            <span class="loading loading-dots loading-md"></span>
            <span class="text-sm">{&props.text}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RefreshIndicatorProps {
    pub active: bool,
}

/// Small inline spinner for refreshes that keep the current content visible
#[function_component(RefreshIndicator)]
pub fn refresh_indicator(props: &RefreshIndicatorProps) -> Html {
    if !props.active {
        return html! {};
    }
    html! {
        <span class="loading loading-spinner loading-xs opacity-60" title="Refreshing"></span>
    }
}
