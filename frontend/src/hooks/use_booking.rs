use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use shared::slots::slots_for_barber;
use shared::{filter_elapsed_slots, BookingDraft, SystemClock, User};
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_toasts::Notifier;
use crate::services::session::SessionHandle;

#[derive(Clone, PartialEq)]
pub struct BookingState {
    pub barbers: Vec<User>,
    pub loading_barbers: bool,
    pub draft: BookingDraft,
    pub slots: Vec<String>,
    pub loading_slots: bool,
    pub submitting: bool,
}

impl BookingState {
    /// The slot list is shown once a date has been picked
    pub fn show_time_slots(&self) -> bool {
        self.draft.barber().is_some() && self.draft.date().is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_complete() && !self.submitting
    }
}

#[derive(Clone)]
pub struct UseBookingActions {
    pub select_barber: Callback<User>,
    pub select_date: Callback<NaiveDate>,
    pub select_slot: Callback<String>,
    pub submit: Callback<()>,
}

pub struct UseBookingResult {
    pub state: BookingState,
    pub actions: UseBookingActions,
}

#[hook]
pub fn use_booking(session: &SessionHandle, notifier: &Notifier) -> UseBookingResult {
    let barbers = use_state(Vec::<User>::new);
    let loading_barbers = use_state(|| false);
    let draft = use_state(BookingDraft::new);
    let slots = use_state(Vec::<String>::new);
    let loading_slots = use_state(|| false);
    let submitting = use_state(|| false);
    // Bumped on every slot fetch so late responses for an older selection are dropped
    let slot_generation = use_mut_ref(|| 0u64);

    // Fetch barbers on mount
    use_effect_with((), {
        let api = session.api().clone();
        let barbers = barbers.clone();
        let loading_barbers = loading_barbers.clone();
        let notifier = notifier.clone();
        move |_| {
            loading_barbers.set(true);
            spawn_local(async move {
                match api.get_barbers().await {
                    Ok(list) => barbers.set(list),
                    Err(err) => {
                        error!(component = "booking", error = %err, "Failed to load barbers");
                        notifier.error("Erro", "Não foi possível carregar a lista de barbeiros.");
                    }
                }
                loading_barbers.set(false);
            });
            || ()
        }
    });

    let select_barber = {
        let draft = draft.clone();
        let slots = slots.clone();
        let loading_slots = loading_slots.clone();
        let slot_generation = slot_generation.clone();
        Callback::from(move |barber: User| {
            let mut next = (*draft).clone();
            next.select_barber(barber);
            draft.set(next);

            next_generation(&slot_generation);
            slots.set(Vec::new());
            loading_slots.set(false);
        })
    };

    let select_date = {
        let api = session.api().clone();
        let draft = draft.clone();
        let slots = slots.clone();
        let loading_slots = loading_slots.clone();
        let slot_generation = slot_generation.clone();
        let notifier = notifier.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = (*draft).clone();
            next.select_date(date);
            let barber_id = next
                .barber()
                .and_then(|barber| barber.id.clone())
                .unwrap_or_default();
            let has_barber = next.barber().is_some();
            draft.set(next);

            let generation = next_generation(&slot_generation);
            slots.set(Vec::new());
            if !has_barber {
                return;
            }

            loading_slots.set(true);
            let api = api.clone();
            let slots = slots.clone();
            let loading_slots = loading_slots.clone();
            let slot_generation = slot_generation.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let result = api.fetch_available_times(date).await;
                if *slot_generation.borrow() != generation {
                    return;
                }

                match result {
                    Ok(availability) => {
                        let offered = slots_for_barber(&availability, &barber_id);
                        slots.set(filter_elapsed_slots(&offered, date, &SystemClock));
                    }
                    Err(err) => {
                        error!(component = "booking", error = %err, "Failed to load time slots");
                        notifier.error("Erro", "Não foi possível carregar os horários disponíveis.");
                        slots.set(Vec::new());
                    }
                }
                loading_slots.set(false);
            });
        })
    };

    let select_slot = {
        let draft = draft.clone();
        Callback::from(move |slot: String| {
            let mut next = (*draft).clone();
            next.select_slot(slot);
            draft.set(next);
        })
    };

    let submit = {
        let api = session.api().clone();
        let session = session.clone();
        let draft = draft.clone();
        let slots = slots.clone();
        let submitting = submitting.clone();
        let slot_generation = slot_generation.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: ()| {
            if *submitting || !draft.is_complete() {
                return;
            }

            let request = match draft.build_request(session.current_user().as_ref()) {
                Ok(request) => request,
                Err(err) => {
                    error!(component = "booking", error = %err, "Cannot build appointment");
                    notifier.error("Erro", err.user_message());
                    return;
                }
            };

            submitting.set(true);
            let api = api.clone();
            let draft = draft.clone();
            let slots = slots.clone();
            let submitting = submitting.clone();
            let slot_generation = slot_generation.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let succeeded = match api.create_appointment(&request).await {
                    Ok(()) => {
                        info!(component = "booking", appointment_id = %request.id, "Appointment created");
                        notifier.success("Sucesso", "Agendamento realizado com sucesso!");
                        true
                    }
                    Err(err) => {
                        error!(component = "booking", error = %err, "Failed to create appointment");
                        notifier.error("Erro", "Não foi possível realizar o agendamento. Tente novamente.");
                        false
                    }
                };

                let mut next = (*draft).clone();
                if next.after_submit(succeeded) {
                    draft.set(next);
                    next_generation(&slot_generation);
                    slots.set(Vec::new());
                }
                submitting.set(false);
            });
        })
    };

    UseBookingResult {
        state: BookingState {
            barbers: (*barbers).clone(),
            loading_barbers: *loading_barbers,
            draft: (*draft).clone(),
            slots: (*slots).clone(),
            loading_slots: *loading_slots,
            submitting: *submitting,
        },
        actions: UseBookingActions {
            select_barber,
            select_date,
            select_slot,
            submit,
        },
    }
}

fn next_generation(counter: &Rc<RefCell<u64>>) -> u64 {
    let mut value = counter.borrow_mut();
    *value += 1;
    *value
}
