use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no modal. Clicking the backdrop counts as "no".
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_yes_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_no_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" role="dialog" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{"⚠️ "}{props.title.clone()}</h3>
                    <p class="modal-message">{props.message.clone()}</p>
                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_no_click}>
                            {"Não"}
                        </button>
                        <button type="button" class="btn btn-primary" onclick={on_yes_click}>
                            {"Sim"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
