use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::exchange::ExchangeState;
use crate::services::exchange_api::fetch_exchange_snapshot;

/// Polls the exchange-rate endpoint on mount and every `POLLING_INTERVAL_MS`.
///
/// Each round is aborted when the component unmounts, so a late response never
/// lands in a torn-down state. Failed fetches keep the last snapshot.
#[hook]
pub fn use_exchange_rates() -> UseStateHandle<ExchangeState> {
    let state = use_state_eq(|| ExchangeState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_exchange_snapshot().await;
                if aborted_check.get() {
                    return;
                }

                if let Err(e) = &result {
                    gloo::console::warn!(format!("Exchange rate refresh failed: {e}"));
                }
                // The handle belongs to the render that scheduled this round,
                // so it still holds the last snapshot
                state.set((*state).clone().with_fetch_result(result));

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
