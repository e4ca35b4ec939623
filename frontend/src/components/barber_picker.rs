use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarberPickerProps {
    pub barbers: Vec<User>,
    pub loading: bool,
    pub selected: Option<User>,
    pub on_select: Callback<User>,
}

#[function_component(BarberPicker)]
pub fn barber_picker(props: &BarberPickerProps) -> Html {
    let selected_id = props.selected.as_ref().and_then(|barber| barber.id.clone());

    html! {
        <div class="card">
            <h2 class="card-header">{"Selecione um barbeiro"}</h2>
            {if props.loading {
                html! { <div class="spinner"></div> }
            } else if props.barbers.is_empty() {
                html! { <p class="empty-message">{"Nenhum barbeiro disponível no momento."}</p> }
            } else {
                html! {
                    <div class="barber-grid">
                        {for props.barbers.iter().map(|barber| {
                            let input_id = format!("barbeiro_{}", barber.id.as_deref().unwrap_or_default());
                            let checked = selected_id.is_some() && barber.id == selected_id;
                            let on_change = {
                                let on_select = props.on_select.clone();
                                let barber = barber.clone();
                                Callback::from(move |_: Event| on_select.emit(barber.clone()))
                            };

                            html! {
                                <div class="barber-option">
                                    <input
                                        type="radio"
                                        name="barbeiro"
                                        id={input_id.clone()}
                                        checked={checked}
                                        onchange={on_change}
                                    />
                                    <label for={input_id}>{barber.display_name()}</label>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}
