use common::Pagination as PageInfo;
use yew::prelude::*;

const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Position as last reported by the server
    pub info: PageInfo,
    /// Page the viewer is on or moving to; may run ahead of `info`
    pub current_page: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Locks every control, e.g. while a page is loading
    #[prop_or_default]
    pub disabled: bool,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_page_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let info = PageInfo {
        current_page: props.current_page,
        ..props.info
    }
    .normalized();
    let current = info.current_page;

    let on_previous = {
        let cb = props.on_previous.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let page_button = |page: u32| {
        let on_click = {
            let on_page_change = props.on_page_change.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_page_change.emit(page);
            })
        };
        html! {
            <button
                class={classes!("btn", "btn-sm", (page == current).then_some("btn-primary"))}
                disabled={props.disabled}
                onclick={on_click}
            >
                {page}
            </button>
        }
    };

    html! {
        <div class="flex flex-wrap justify-center items-center gap-2 my-4">
            <button class="btn btn-sm" disabled={props.disabled || !props.can_go_previous} onclick={on_previous}>
                <i class="fas fa-chevron-left"></i>
            </button>
            { for info.page_window(MAX_VISIBLE_PAGES).into_iter().map(|slot| match slot {
                Some(page) => page_button(page),
                None => html! { <span class="px-2 opacity-60">{"..."}</span> },
            })}
            <button class="btn btn-sm" disabled={props.disabled || !props.can_go_next} onclick={on_next}>
                <i class="fas fa-chevron-right"></i>
            </button>
            <span class="ml-4 text-sm text-base-content/70">
                {format!("Page {} of {} ({} movements)", current, info.total_pages, info.total_items)}
            </span>
        </div>
    }
}
