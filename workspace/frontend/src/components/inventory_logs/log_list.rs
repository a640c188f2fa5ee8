use chrono::Local;
use common::{classify_movement, InventoryLogEntry, MovementKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entries: Vec<InventoryLogEntry>,
}

#[function_component(LogList)]
pub fn log_list(props: &Props) -> Html {
    html! {
        <div class="flex flex-col gap-2">
            { for props.entries.iter().map(render_entry) }
        </div>
    }
}

fn render_entry(entry: &InventoryLogEntry) -> Html {
    let descriptor = classify_movement(entry.log_type.as_deref());
    let direction = entry.direction();

    let type_label = match (descriptor.kind, entry.log_type.as_deref()) {
        (MovementKind::Other, Some(raw)) if !raw.trim().is_empty() => raw.to_string(),
        (kind, _) => kind.label().to_string(),
    };

    let created = entry.formatted_created_at(&Local, "%Y-%m-%d %H:%M");

    html! {
        <div
            key={entry.id}
            class={classes!("flex", "items-start", "gap-4", "p-3", "rounded-box", "bg-base-200", "border-l-4", descriptor.border_class)}
        >
            <i class={classes!(descriptor.icon, descriptor.color_class, "text-xl", "mt-1", "w-6")}></i>
            <div class="flex-1 min-w-0">
                <div class="flex flex-wrap items-center gap-2">
                    <span class="font-semibold">{type_label}</span>
                    { optional_badge(entry.reference.as_deref(), "badge-ghost") }
                    { optional_badge(entry.condition.as_deref(), "badge-outline") }
                </div>
                { if let Some(reason) = entry.reason.as_deref().filter(|r| !r.is_empty()) {
                    html! { <div class="text-sm opacity-70 truncate">{reason}</div> }
                } else {
                    html! {}
                }}
                <div class="text-xs opacity-50">{created}</div>
            </div>
            <div class="text-right">
                <div class={classes!("font-mono", "font-bold", direction.text_class())}>
                    <i class={classes!(direction.icon(), "mr-1")}></i>
                    {entry.formatted_delta()}
                </div>
                <div class="text-xs opacity-60 font-mono">
                    {format!("{} → {}", entry.balance_before, entry.balance_after)}
                </div>
            </div>
        </div>
    }
}

fn optional_badge(text: Option<&str>, style: &'static str) -> Html {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => html! { <span class={classes!("badge", "badge-sm", style)}>{text}</span> },
        None => html! {},
    }
}
