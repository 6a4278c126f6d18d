use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Config;
use crate::models::notification::{Notification, ToastAction, Toasts};

/// Handle returned by `use_toasts` hook
#[derive(Clone, PartialEq)]
pub struct ToastsHandle {
    pub toasts: UseReducerHandle<Toasts>,
    pub notify: Callback<Notification>,
    pub dismiss: Callback<u32>,
}

/// Notification queue; each toast removes itself after `TOAST_DURATION_MS`
#[hook]
pub fn use_toasts() -> ToastsHandle {
    let toasts = use_reducer(Toasts::default);
    let next_id = use_mut_ref(|| 0u32);

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let notify = {
        let toasts = toasts.clone();
        Callback::from(move |notification| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                let id = *next_id;
                *next_id = id.wrapping_add(1);
                id
            };
            toasts.dispatch(ToastAction::Push(id, notification));

            let toasts = toasts.clone();
            Timeout::new(Config::TOAST_DURATION_MS, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    ToastsHandle {
        toasts,
        notify,
        dismiss,
    }
}
