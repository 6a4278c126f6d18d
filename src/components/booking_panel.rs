use chrono::{NaiveDate, NaiveTime};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_reservation::use_reservation;
use crate::models::notification::Notification;
use crate::models::reservation::{DraftAction, HOUR_OPTIONS, RentalMode, START_TIMES};
use crate::models::yacht::Yacht;

#[derive(Properties, PartialEq)]
pub struct BookingPanelProps {
    pub yacht: Rc<Yacht>,
    pub on_notify: Callback<Notification>,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Reservation form: rental mode, dates or hours, guests, subtotal and submit.
#[function_component(BookingPanel)]
pub fn booking_panel(props: &BookingPanelProps) -> Html {
    let draft = use_reservation();
    let yacht = &props.yacht;

    let on_mode = |mode: RentalMode| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.dispatch(DraftAction::SetMode(mode)))
    };

    let on_start = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetStart(parse_date(&input.value())));
        })
    };

    let on_end = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetEnd(parse_date(&input.value())));
        })
    };

    let on_start_time = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(time) = NaiveTime::parse_from_str(&select.value(), "%H:%M") {
                draft.dispatch(DraftAction::SetStartTime(time));
            }
        })
    };

    let on_hours = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(hours) = select.value().parse() {
                draft.dispatch(DraftAction::SetHours(hours));
            }
        })
    };

    let on_guests = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let guests = input.value().parse().unwrap_or(1);
            draft.dispatch(DraftAction::SetGuests(guests));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let yacht = yacht.clone();
        let notify = props.on_notify.clone();
        Callback::from(move |_: MouseEvent| {
            let notification = match draft.validate(&yacht) {
                Ok(summary) => Notification::reservation_requested(&summary),
                Err(error) => error.into(),
            };
            notify.emit(notification);
        })
    };

    let duration = draft.duration();
    let symbol = yacht.currency_symbol();
    let subtotal = if duration > 0 {
        format!("{} {symbol}", draft.total_price(yacht))
    } else {
        "—".to_string()
    };
    let selected_time = draft.start_time.format("%H:%M").to_string();

    html! {
        <aside class="booking-panel">
            <div class="booking-header">
                <div>
                    <div class="booking-price">{format!("{} {symbol}", yacht.price)}</div>
                    <div class="muted">{draft.mode.per_unit_label()}</div>
                </div>
                <div class="mode-toggle" role="group" aria-label="Rental type">
                    {
                        RentalMode::all().iter().map(|&mode| {
                            let class = classes!("mode-option", (mode == draft.mode).then_some("active"));
                            html! {
                                <button {class} key={mode.code()} onclick={on_mode(mode)}>{mode.label()}</button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="booking-field">
                <label>{"Region"}</label>
                <select disabled=true>
                    <option selected=true>{&yacht.location}</option>
                </select>
            </div>

            if draft.mode == RentalMode::Daily {
                <div class="booking-field">
                    <label>{"Dates"}</label>
                    <div class="date-range">
                        <input type="date" aria-label="Start date" value={input_date(draft.dates.start)} onchange={on_start} />
                        <input
                            type="date"
                            aria-label="End date"
                            min={input_date(draft.dates.start)}
                            value={input_date(draft.dates.end)}
                            disabled={draft.dates.start.is_none()}
                            onchange={on_end}
                        />
                    </div>
                    if duration > 0 {
                        <p class="muted">{"Selected: "}{draft.duration_label()}</p>
                    }
                </div>
            } else {
                <div class="booking-field hourly">
                    <div>
                        <label>{"Start time"}</label>
                        <select onchange={on_start_time}>
                            {
                                START_TIMES.iter().map(|&t| html! {
                                    <option value={t} selected={t == selected_time}>{t}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div>
                        <label>{"Duration (hours)"}</label>
                        <select onchange={on_hours}>
                            {
                                HOUR_OPTIONS.map(|h| html! {
                                    <option value={h.to_string()} selected={h == draft.hours}>{h}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
            }

            <div class="booking-field">
                <label>{"Guests"}</label>
                <input
                    type="number"
                    min="1"
                    max={yacht.capacity.to_string()}
                    value={draft.guests.to_string()}
                    oninput={on_guests}
                />
                <p class="muted small">{format!("Maximum {} guests", yacht.capacity)}</p>
            </div>

            <div class="booking-subtotal">
                <div class="subtotal-line">
                    <span>{"Subtotal"}</span>
                    <strong>{subtotal}</strong>
                </div>
                <p class="muted small">{"Fuel and basic crew are included. Extra requests are added to the offer."}</p>
            </div>

            <button class="booking-submit" onclick={on_submit}>{"Send reservation request"}</button>
            <p class="muted small">{"Your request is forwarded to us and we will get back to you shortly."}</p>
        </aside>
    }
}
