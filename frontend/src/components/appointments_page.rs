use shared::appointments::format_appointment_time;
use shared::{Appointment, Clock, SystemClock};
use yew::prelude::*;

use super::confirm_dialog::ConfirmDialog;
use crate::hooks::use_appointments::use_appointments;
use crate::hooks::use_toasts::Notifier;
use crate::services::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct AppointmentsPageProps {
    pub session: SessionHandle,
    pub notifier: Notifier,
}

#[function_component(AppointmentsPage)]
pub fn appointments_page(props: &AppointmentsPageProps) -> Html {
    let appointments = use_appointments(&props.session, &props.notifier);
    let state = &appointments.state;
    let now = SystemClock.now();
    let viewer_is_barber = state.user.as_ref().is_some_and(|user| user.is_barber);

    // Barbers see who booked; clients see who cuts
    let counterpart = |appointment: &Appointment| {
        let other = if viewer_is_barber {
            appointment.client.as_ref()
        } else {
            appointment.barber.as_ref()
        };
        other
            .and_then(|user| user.name.clone())
            .unwrap_or_default()
    };

    let rows = state.appointments.iter().map(|appointment| {
        let passed = appointment.has_passed(now);
        let when = appointment
            .scheduled_at()
            .map(format_appointment_time)
            .unwrap_or_default();
        let on_cancel = {
            let request_cancel = appointments.actions.request_cancel.clone();
            let appointment = appointment.clone();
            Callback::from(move |_: MouseEvent| request_cancel.emit(appointment.clone()))
        };

        html! {
            <tr key={appointment.id.clone().unwrap_or_default()}>
                <td>{when}</td>
                <td>{counterpart(appointment)}</td>
                <td>
                    <span class={classes!("tag", if passed { "tag-success" } else { "tag-info" })}>
                        {if passed { "Realizado" } else { "Agendado" }}
                    </span>
                </td>
                <td>
                    <button
                        type="button"
                        class="btn btn-danger btn-round"
                        title="Cancelar agendamento"
                        disabled={passed || state.cancelling}
                        onclick={on_cancel}
                    >
                        {"✕"}
                    </button>
                </td>
            </tr>
        }
    });

    let on_confirm = appointments.actions.confirm_cancel.clone();
    let on_dismiss = appointments.actions.dismiss_cancel.clone();

    html! {
        <div class="container appointments-page">
            <h1 class="page-title">{"Meus Agendamentos"}</h1>

            {if state.loading {
                html! { <div class="spinner"></div> }
            } else {
                html! {
                    <div class="card">
                        <table class="appointments-table">
                            <thead>
                                <tr>
                                    <th>{"Data e Hora"}</th>
                                    <th>{if viewer_is_barber { "Cliente" } else { "Barbeiro" }}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Cancelar"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for rows}
                            </tbody>
                        </table>
                        {if state.appointments.is_empty() {
                            html! { <p class="empty-message">{"Você ainda não possui agendamentos."}</p> }
                        } else { html! {} }}
                    </div>
                }
            }}

            <ConfirmDialog
                is_open={state.pending_cancel.is_some()}
                title="Cancelar Agendamento"
                message="Tem certeza que deseja cancelar este agendamento?"
                {on_confirm}
                on_cancel={on_dismiss}
            />
        </div>
    }
}
