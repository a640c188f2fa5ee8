use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub title: AttrValue,
    pub message: AttrValue,
    /// Shown under the message to say how the view recovers
    #[prop_or_default]
    pub retry_hint: Option<AttrValue>,
}

/// Inline failure panel without a retry button.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    log::warn!("{}: {}", props.title, props.message);

    html! {
        <div role="alert" class="alert alert-error my-6">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <div>
                <h3 class="font-semibold">{&props.title}</h3>
                <div class="text-sm">{&props.message}</div>
                { for props.retry_hint.iter().map(|hint| html! {
                    <div class="text-xs opacity-70 mt-1">{hint}</div>
                })}
            </div>
        </div>
    }
}
