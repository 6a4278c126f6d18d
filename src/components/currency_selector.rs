use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::exchange::Currency;

#[derive(Properties, PartialEq)]
pub struct CurrencySelectorProps {
    pub currency: Currency,
    pub on_change: Callback<Currency>,
}

/// Display currency dropdown. Only affects the rate summary, never booking prices.
#[function_component(CurrencySelector)]
pub fn currency_selector(props: &CurrencySelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(currency) = target.value().parse::<Currency>() {
                callback.emit(currency);
            }
        })
    };

    html! {
        <label class="currency-selector">
            <span class="currency-label">{"Currency"}</span>
            <select onchange={on_change} aria-label="Select display currency">
                {
                    Currency::all().iter().map(|c| {
                        let selected = *c == props.currency;
                        html! {
                            <option value={c.code()} {selected}>{c.to_string()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </label>
    }
}
