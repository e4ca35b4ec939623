use shared::{order_appointments, Appointment, Clock, SystemClock, User};
use tracing::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toasts::Notifier;
use crate::services::api::ApiClient;
use crate::services::session::SessionHandle;

#[derive(Clone, PartialEq)]
pub struct AppointmentsState {
    pub user: Option<User>,
    /// Upcoming first (soonest first), then past (most recent first)
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub cancelling: bool,
    /// Waiting for the user to confirm cancellation
    pub pending_cancel: Option<Appointment>,
}

#[derive(Clone)]
pub struct UseAppointmentsActions {
    pub request_cancel: Callback<Appointment>,
    pub confirm_cancel: Callback<()>,
    pub dismiss_cancel: Callback<()>,
}

pub struct UseAppointmentsResult {
    pub state: AppointmentsState,
    pub actions: UseAppointmentsActions,
}

#[derive(Clone)]
struct ListHandles {
    api: ApiClient,
    appointments: UseStateHandle<Vec<Appointment>>,
    loading: UseStateHandle<bool>,
    notifier: Notifier,
}

impl ListHandles {
    async fn load(&self, user_id: &str) {
        self.loading.set(true);
        match self.api.fetch_user_appointments(user_id).await {
            Ok(list) => {
                info!(component = "appointments", count = list.len(), "Appointments loaded");
                self.appointments.set(order_appointments(list, SystemClock.now()));
            }
            Err(err) => {
                error!(component = "appointments", error = %err, "Failed to load appointments");
                self.notifier.error("Erro", "Não foi possível carregar seus agendamentos.");
            }
        }
        self.loading.set(false);
    }
}

#[hook]
pub fn use_appointments(session: &SessionHandle, notifier: &Notifier) -> UseAppointmentsResult {
    let user = use_state(|| session.current_user());
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| false);
    let cancelling = use_state(|| false);
    let pending_cancel = use_state(|| Option::<Appointment>::None);

    let handles = ListHandles {
        api: session.api().clone(),
        appointments: appointments.clone(),
        loading: loading.clone(),
        notifier: notifier.clone(),
    };

    // Load on mount
    use_effect_with((), {
        let handles = handles.clone();
        let user = (*user).clone();
        move |_| {
            match user.and_then(|user| user.id) {
                Some(user_id) => spawn_local(async move { handles.load(&user_id).await }),
                None => {
                    warn!(component = "appointments", "No authenticated user to list appointments for");
                    handles.notifier.error("Erro", "Usuário não autenticado");
                }
            }
            || ()
        }
    });

    let request_cancel = {
        let pending_cancel = pending_cancel.clone();
        Callback::from(move |appointment: Appointment| {
            pending_cancel.set(Some(appointment));
        })
    };

    let dismiss_cancel = {
        let pending_cancel = pending_cancel.clone();
        Callback::from(move |_: ()| pending_cancel.set(None))
    };

    let confirm_cancel = {
        let handles = handles.clone();
        let user = user.clone();
        let cancelling = cancelling.clone();
        let pending_cancel = pending_cancel.clone();
        Callback::from(move |_: ()| {
            let Some(appointment_id) = (*pending_cancel).as_ref().and_then(|a| a.id.clone()) else {
                pending_cancel.set(None);
                return;
            };

            pending_cancel.set(None);
            cancelling.set(true);

            let handles = handles.clone();
            let user_id = (*user).as_ref().and_then(|user| user.id.clone());
            let cancelling = cancelling.clone();
            spawn_local(async move {
                match handles.api.cancel_appointment(&appointment_id).await {
                    Ok(()) => {
                        info!(component = "appointments", appointment_id = %appointment_id, "Appointment cancelled");
                        handles.notifier.success("Sucesso", "Agendamento cancelado com sucesso!");
                        if let Some(user_id) = user_id {
                            handles.load(&user_id).await;
                        }
                    }
                    Err(err) => {
                        error!(component = "appointments", error = %err, "Failed to cancel appointment");
                        handles
                            .notifier
                            .error("Erro", "Não foi possível cancelar o agendamento. Tente novamente.");
                    }
                }
                cancelling.set(false);
            });
        })
    };

    UseAppointmentsResult {
        state: AppointmentsState {
            user: (*user).clone(),
            appointments: (*appointments).clone(),
            loading: *loading,
            cancelling: *cancelling,
            pending_cancel: (*pending_cancel).clone(),
        },
        actions: UseAppointmentsActions {
            request_cancel,
            confirm_cancel,
            dismiss_cancel,
        },
    }
}
