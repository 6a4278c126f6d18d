use yew::prelude::*;

use crate::models::exchange::Currency;
use crate::services::storage::{LocalStore, Preferences};

/// Handle returned by `use_preferences` hook
#[derive(Clone, PartialEq)]
pub struct PreferencesHandle {
    pub sidebar_collapsed: bool,
    pub currency: Currency,
    pub set_sidebar_collapsed: Callback<bool>,
    pub toggle_sidebar: Callback<()>,
    pub set_currency: Callback<Currency>,
}

/// Sidebar and display-currency preferences, persisted to localStorage
#[hook]
pub fn use_preferences() -> PreferencesHandle {
    let collapsed = use_state(|| stored().sidebar_collapsed().unwrap_or(false));
    let currency = use_state(|| stored().currency());

    // Effect: Persist sidebar flag on change
    {
        let collapsed_value = *collapsed;
        use_effect_with(collapsed_value, move |collapsed| {
            stored().set_sidebar_collapsed(*collapsed);
            || ()
        });
    }

    // Effect: Persist currency on change
    {
        let currency_value = *currency;
        use_effect_with(currency_value, move |currency| {
            stored().set_currency(*currency);
            || ()
        });
    }

    let set_sidebar_collapsed = {
        let collapsed = collapsed.clone();
        Callback::from(move |value| collapsed.set(value))
    };

    let toggle_sidebar = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| collapsed.set(!*collapsed))
    };

    let set_currency = {
        let currency = currency.clone();
        Callback::from(move |value| currency.set(value))
    };

    PreferencesHandle {
        sidebar_collapsed: *collapsed,
        currency: *currency,
        set_sidebar_collapsed,
        toggle_sidebar,
        set_currency,
    }
}

fn stored() -> Preferences<LocalStore> {
    Preferences::new(LocalStore)
}
