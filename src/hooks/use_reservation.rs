use yew::prelude::*;

use crate::models::reservation::ReservationDraft;

/// Fresh reservation draft for the current page visit
#[hook]
pub fn use_reservation() -> UseReducerHandle<ReservationDraft> {
    use_reducer(ReservationDraft::default)
}
