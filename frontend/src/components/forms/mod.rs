pub mod login_form;
pub mod registration_form;

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    /// Shown under the input when set
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub disabled: bool,
    pub on_change: Callback<String>,
}

/// Labelled input with an inline validation message
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let error_id = format!("{}-error", props.id);

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                class={classes!(props.error.is_some().then_some("invalid"))}
                value={props.value.clone()}
                disabled={props.disabled}
                aria-describedby={error_id.clone()}
                {oninput}
            />
            {if let Some(error) = props.error {
                html! { <div id={error_id} class="form-message error">{error}</div> }
            } else { html! {} }}
        </div>
    }
}
