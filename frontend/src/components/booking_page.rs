use shared::slots::booking_window;
use shared::{Clock, SystemClock};
use yew::prelude::*;

use super::barber_picker::BarberPicker;
use super::date_picker::DatePicker;
use super::time_slot_picker::TimeSlotPicker;
use crate::hooks::use_booking::use_booking;
use crate::hooks::use_toasts::Notifier;
use crate::services::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct BookingPageProps {
    pub session: SessionHandle,
    pub notifier: Notifier,
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let booking = use_booking(&props.session, &props.notifier);
    let state = &booking.state;
    let window = booking_window(SystemClock.today());

    let on_submit = {
        let submit = booking.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="container booking-page">
            <h1 class="page-title">{"Agendar Serviço"}</h1>

            <form class="booking-form" onsubmit={on_submit}>
                <div class="booking-columns">
                    <div class="booking-column">
                        <BarberPicker
                            barbers={state.barbers.clone()}
                            loading={state.loading_barbers}
                            selected={state.draft.barber().cloned()}
                            on_select={booking.actions.select_barber.clone()}
                        />
                    </div>

                    {if state.draft.barber().is_some() {
                        html! {
                            <div class="booking-column">
                                // keyed by barber so the calendar resets with the selection
                                <DatePicker
                                    key={state.draft.barber().and_then(|b| b.id.clone()).unwrap_or_default()}
                                    selected={state.draft.date()}
                                    {window}
                                    on_select={booking.actions.select_date.clone()}
                                />
                            </div>
                        }
                    } else { html! {} }}

                    {if state.show_time_slots() {
                        html! {
                            <div class="booking-column">
                                <TimeSlotPicker
                                    slots={state.slots.clone()}
                                    loading={state.loading_slots}
                                    selected={state.draft.slot().map(str::to_string)}
                                    on_select={booking.actions.select_slot.clone()}
                                />
                                <div class="booking-actions">
                                    <button
                                        type="submit"
                                        class="btn btn-primary btn-block"
                                        disabled={!state.can_submit()}
                                    >
                                        {if state.submitting { "Agendando..." } else { "Confirmar Agendamento" }}
                                    </button>
                                </div>
                            </div>
                        }
                    } else { html! {} }}
                </div>
            </form>
        </div>
    }
}
