use std::rc::Rc;
use yew::prelude::*;
use crate::settings;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
}

impl ToastContext {
    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastType::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList(Vec<Toast>);

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList(toasts))
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let remove_toast = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let add_toast = {
        let dispatcher = toasts.dispatcher();

        Callback::from(move |(message, toast_type): (String, ToastType)| {
            let id = {
                let mut next = next_id.borrow_mut();
                let id = *next;
                *next += 1;
                id
            };
            dispatcher.dispatch(ToastAction::Add(Toast {
                id,
                message,
                toast_type,
            }));

            // Auto-dismiss
            let duration = settings::get_settings().toast_duration_ms;
            let dispatcher = dispatcher.clone();
            let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            });
            timeout_handle.forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.0.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
