use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotPickerProps {
    pub slots: Vec<String>,
    pub loading: bool,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(TimeSlotPicker)]
pub fn time_slot_picker(props: &TimeSlotPickerProps) -> Html {
    html! {
        <div class="card">
            <h2 class="card-header">{"Horários disponíveis"}</h2>
            {if props.loading {
                html! { <div class="spinner"></div> }
            } else if props.slots.is_empty() {
                html! { <p class="empty-message">{"Nenhum horário disponível para esta data."}</p> }
            } else {
                html! {
                    <div class="slot-grid">
                        {for props.slots.iter().map(|slot| {
                            let is_selected = props.selected.as_deref() == Some(slot.as_str());
                            let onclick = {
                                let on_select = props.on_select.clone();
                                let slot = slot.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(slot.clone()))
                            };

                            html! {
                                <button
                                    type="button"
                                    class={classes!("btn", if is_selected { "btn-primary" } else { "btn-outlined" })}
                                    {onclick}
                                >
                                    {slot}
                                </button>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}
