use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a notification stays on screen
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub summary: String,
    pub detail: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Handle for raising notifications from any screen
#[derive(Clone)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<RefCell<u32>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    pub fn success(&self, summary: &str, detail: &str) {
        self.push(ToastKind::Success, summary, detail);
    }

    pub fn error(&self, summary: &str, detail: &str) {
        self.push(ToastKind::Error, summary, detail);
    }

    pub fn dismiss(&self, id: u32) {
        self.dispatcher.dispatch(ToastAction::Dismiss(id));
    }

    fn push(&self, kind: ToastKind, summary: &str, detail: &str) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };

        self.dispatcher.dispatch(ToastAction::Push(Toast {
            id,
            kind,
            summary: summary.to_string(),
            detail: detail.to_string(),
        }));

        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            dispatcher.dispatch(ToastAction::Dismiss(id));
        });
    }
}

pub struct UseToastsResult {
    pub toasts: Vec<Toast>,
    pub notifier: Notifier,
}

#[hook]
pub fn use_toasts() -> UseToastsResult {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    UseToastsResult {
        toasts: list.toasts.clone(),
        notifier: Notifier {
            dispatcher: list.dispatcher(),
            next_id,
        },
    }
}
