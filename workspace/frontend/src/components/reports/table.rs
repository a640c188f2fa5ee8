use common::{format_currency, format_magnitude, RankedCategory};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub categories: Vec<RankedCategory>,
}

#[function_component(CategoryTable)]
pub fn category_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Category"}</th>
                        <th class="text-right">{"Units sold"}</th>
                        <th class="text-right">{"Revenue"}</th>
                        <th class="text-right">{"Products"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.categories.iter().map(|row| html! {
                        <tr key={row.category.clone()}>
                            <td>
                                <span class="inline-block w-3 h-3 rounded-full mr-2" style={format!("background-color: {}", row.color)}></span>
                                {row.rank + 1}
                            </td>
                            <td class="font-medium">{&row.category}</td>
                            <td class="text-right font-mono" title={format_magnitude(row.units_sold as f64)}>
                                {row.units_sold}
                            </td>
                            <td class="text-right font-mono" title={format!("{:.2}", row.revenue)}>
                                {format_currency(row.revenue)}
                            </td>
                            <td class="text-right">
                                {row.product_count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())}
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
