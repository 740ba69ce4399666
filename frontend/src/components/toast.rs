use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Timeout;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastRequest {
    pub fn info(title: &str, description: &str) -> Self {
        Self { title: title.to_string(), description: description.to_string(), variant: ToastVariant::Default }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self { title: title.to_string(), description: description.to_string(), variant: ToastVariant::Destructive }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub request: ToastRequest,
}

pub enum ToastAction {
    Push(ToastRequest),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = (*self).clone();
        match action {
            ToastAction::Push(request) => {
                list.toasts.push(Toast { id: list.next_id, request });
                list.next_id += 1;
            }
            ToastAction::Dismiss(id) => list.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(list)
    }
}

pub type ToastContext = UseReducerHandle<ToastList>;

/// Callback that shows a toast. Does nothing outside a `ToastProvider`.
#[hook]
pub fn use_toast() -> Callback<ToastRequest> {
    let context = use_context::<ToastContext>();
    Callback::from(move |request: ToastRequest| match &context {
        Some(context) => context.dispatch(ToastAction::Push(request)),
        None => log::warn!("Toast requested outside ToastProvider: {}", request.title),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    html! {
        <ContextProvider<ToastContext> context={toasts.clone()}>
            { props.children.clone() }
            <div class="toast-viewport" role="region" aria-label="Notificações">
                { for toasts.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} toasts={toasts.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    right: 1rem;
                    bottom: 1rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    max-width: 360px;
                }
                .toast {
                    position: relative;
                    background: #ffffff;
                    color: #1c2a25;
                    border: 1px solid rgba(28, 42, 37, 0.12);
                    border-radius: 12px;
                    padding: 1rem 2.5rem 1rem 1rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                    animation: toastIn 0.3s ease-out;
                }
                .toast--destructive {
                    background: #b42318;
                    color: #ffffff;
                }
                .toast__title { font-weight: 600; font-size: 0.95rem; }
                .toast__description { font-size: 0.85rem; margin-top: 0.25rem; opacity: 0.9; }
                .toast__close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    toasts: ToastContext,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let toasts = props.toasts.clone();
        use_effect_with_deps(move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            });
            move || drop(timeout)
        }, id);
    }

    let dismiss = {
        let toasts = props.toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let request = &props.toast.request;
    let variant_class = match request.variant {
        ToastVariant::Default => None,
        ToastVariant::Destructive => Some("toast--destructive"),
    };

    html! {
        <div class={classes!("toast", variant_class)} role="status">
            <div class="toast__title">{ &request.title }</div>
            <div class="toast__description">{ &request.description }</div>
            <button class="toast__close" onclick={dismiss} aria-label="Fechar">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes_one() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(ToastRequest::info("Recebido!", "ok")));
        let list = list.reduce(ToastAction::Push(ToastRequest::error("Erro", "falhou")));

        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].request.variant, ToastVariant::Destructive);

        let list = list.reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
