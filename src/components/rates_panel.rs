use std::rc::Rc;
use yew::prelude::*;

use super::sparkline::Sparkline;
use crate::models::exchange::{Currency, ExchangeSnapshot};

#[derive(Properties, PartialEq)]
pub struct RateSummaryProps {
    pub snapshot: Option<Rc<ExchangeSnapshot>>,
    pub currency: Currency,
}

/// "1 EUR ≈ x" for the selected display currency
#[function_component(RateSummary)]
pub fn rate_summary(props: &RateSummaryProps) -> Html {
    match &props.snapshot {
        Some(snapshot) => {
            let value = match props.currency {
                Currency::Eur => "1.00".to_string(),
                other => snapshot
                    .rate_for(other)
                    .map_or_else(|| "—".to_string(), |rate| rate.to_string()),
            };
            html! {
                <div class="rate-summary">
                    <span>{"1 EUR ≈"}</span>
                    <strong>{value}{" "}{props.currency.code()}</strong>
                </div>
            }
        }
        None => html! {
            <div class="rate-summary loading">{"Loading rates..."}</div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct RatesPanelProps {
    pub snapshot: Option<Rc<ExchangeSnapshot>>,
}

/// Detailed rates drop-down: EUR rate, TRY selling rate and recent trend per currency
#[function_component(RatesPanel)]
pub fn rates_panel(props: &RatesPanelProps) -> Html {
    let Some(snapshot) = &props.snapshot else {
        return html! {
            <div class="rates-panel">
                <p class="muted">{"Loading rates..."}</p>
            </div>
        };
    };

    html! {
        <div class="rates-panel">
            <div class="rates-panel-title">{"Current rates (1 EUR)"}</div>
            {
                snapshot.panel_rows().into_iter().map(|row| {
                    let code = row.currency.code();
                    html! {
                        <div class="rate-row" key={code}>
                            <span class="rate-code">{code}</span>
                            <span class="rate-value">{format!("{:.4}", row.per_eur)}</span>
                            <span class="rate-try muted">
                                {format!("Selling: 1 {code} ≈ {:.4} TRY", row.in_try)}
                            </span>
                            if row.history.is_empty() {
                                <div class="sparkline-placeholder" />
                            } else {
                                <Sparkline data={row.history} />
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
            if let Some(updated) = snapshot.last_updated_display() {
                <div class="rates-footnote muted">{"Last update: "}{updated}</div>
            }
            if let Some(official) = snapshot.tcmb_date_display() {
                <div class="rates-footnote muted">{"Official rate date: "}{official}</div>
            }
        </div>
    }
}
