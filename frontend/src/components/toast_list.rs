use yew::prelude::*;

use crate::hooks::use_toasts::{Notifier, Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastListProps {
    pub toasts: Vec<Toast>,
    pub notifier: Notifier,
}

#[function_component(ToastList)]
pub fn toast_list(props: &ToastListProps) -> Html {
    html! {
        <div class="toast-container">
            {for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let notifier = props.notifier.clone();
                let on_close = Callback::from(move |_: MouseEvent| notifier.dismiss(id));
                let kind_class = match toast.kind {
                    ToastKind::Success => "toast-success",
                    ToastKind::Error => "toast-error",
                };

                html! {
                    <div key={id} class={classes!("toast", kind_class)} role="alert">
                        <div class="toast-body">
                            <strong class="toast-summary">{toast.summary.clone()}</strong>
                            <p class="toast-detail">{toast.detail.clone()}</p>
                        </div>
                        <button type="button" class="toast-close" onclick={on_close}>{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}
