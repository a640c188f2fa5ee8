use common::Product;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Options after filtering; the selected product is always included
    pub products: Vec<Product>,
    pub filter: String,
    pub selected: Option<Product>,
    #[prop_or_default]
    pub loading: bool,
    pub on_filter: Callback<String>,
    pub on_select: Callback<Option<i64>>,
}

#[function_component(ProductPicker)]
pub fn product_picker(props: &Props) -> Html {
    let on_input = {
        let on_filter = props.on_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_filter.emit(input.value());
        })
    };

    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            log::debug!("Product picker changed to '{}'", value);
            on_select.emit(value.parse::<i64>().ok());
        })
    };

    let selected_id = props.selected.as_ref().map(|p| p.id);

    html! {
        <div class="flex flex-col md:flex-row gap-3 md:items-end">
            <div class="form-control w-full md:max-w-xs">
                <label class="label"><span class="label-text">{"Search products"}</span></label>
                <input
                    type="text"
                    class="input input-bordered input-sm w-full"
                    placeholder="Name or SKU"
                    value={props.filter.clone()}
                    oninput={on_input}
                    disabled={props.loading}
                />
            </div>
            <div class="form-control w-full md:max-w-md">
                <label class="label"><span class="label-text">{"Product"}</span></label>
                <select class="select select-bordered select-sm w-full" onchange={on_change} disabled={props.loading}>
                    <option value="" selected={selected_id.is_none()}>
                        { if props.loading { "Loading products..." } else { "Select a product" } }
                    </option>
                    { for props.products.iter().map(|product| html! {
                        <option
                            key={product.id}
                            value={product.id.to_string()}
                            selected={selected_id == Some(product.id)}
                        >
                            {product.display_label()}
                        </option>
                    })}
                </select>
            </div>
            { if let Some(product) = &props.selected {
                let badge = if product.is_low_stock() { "badge-warning" } else { "badge-ghost" };
                html! {
                    <div class="flex gap-2 items-center pb-1">
                        <span class="badge badge-outline">{&product.category}</span>
                        <span class={classes!("badge", badge)}>
                            {format!("Stock {} / min {}", product.stock, product.min_stock)}
                        </span>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
