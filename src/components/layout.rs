use std::rc::Rc;
use yew::prelude::*;

use super::currency_selector::CurrencySelector;
use super::rates_panel::{RateSummary, RatesPanel};
use super::sidebar::Sidebar;
use crate::config::Config;
use crate::hooks::use_exchange_rates::use_exchange_rates;
use crate::hooks::use_preferences::use_preferences;
use crate::models::catalog::Catalog;
use crate::route::Route;
use crate::utils::viewport::{is_small_screen, on_viewport_resize, viewport_width};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub catalog: Rc<Catalog>,
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

/// Page shell: header with currency tools, navigation sidebar and content area.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let prefs = use_preferences();
    let rates = use_exchange_rates();
    let show_rates = use_state(|| false);

    // Effect: Collapse the sidebar on inner pages, expand it on the landing page
    {
        let set_collapsed = prefs.set_sidebar_collapsed.clone();
        use_effect_with(props.route.clone(), move |route| {
            set_collapsed.emit(route.is_inner());
            || ()
        });
    }

    // Effect: Force the collapsed sidebar on small screens
    {
        let set_collapsed = prefs.set_sidebar_collapsed.clone();
        use_effect_with((), move |_| {
            if viewport_width().is_some_and(is_small_screen) {
                set_collapsed.emit(true);
            }

            let listener = on_viewport_resize(Config::RESIZE_DEBOUNCE_MS, move |width| {
                if is_small_screen(width) {
                    set_collapsed.emit(true);
                }
            });

            move || drop(listener)
        });
    }

    let on_toggle_sidebar = {
        let toggle = prefs.toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_toggle_rates = {
        let show_rates = show_rates.clone();
        Callback::from(move |_: MouseEvent| show_rates.set(!*show_rates))
    };

    let snapshot = rates.data().cloned();
    let toggle_title = if prefs.sidebar_collapsed {
        "Expand sidebar"
    } else {
        "Collapse sidebar"
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <button class="sidebar-toggle" onclick={on_toggle_sidebar} title={toggle_title} aria-label={toggle_title}>
                    {"☰"}
                </button>
                <a href={Route::Home.href()} class="brand">{"On Hotel Antalya"}</a>

                <div class="currency-tools">
                    <CurrencySelector currency={prefs.currency} on_change={prefs.set_currency.clone()} />
                    <button class="rates-toggle" onclick={on_toggle_rates} aria-expanded={(*show_rates).to_string()}>
                        {"Details"}
                    </button>
                    <RateSummary snapshot={snapshot.clone()} currency={prefs.currency} />
                    if *show_rates {
                        <RatesPanel {snapshot} />
                    }
                </div>
            </header>

            <div class="app-body">
                <Sidebar
                    catalog={props.catalog.clone()}
                    route={props.route.clone()}
                    collapsed={prefs.sidebar_collapsed}
                />
                <main class="app-main">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
