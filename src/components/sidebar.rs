use std::rc::Rc;
use yew::prelude::*;

use crate::models::catalog::Catalog;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub catalog: Rc<Catalog>,
    pub route: Route,
    pub collapsed: bool,
}

/// Site navigation. In collapsed form only the initials are shown.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let class = classes!("sidebar", props.collapsed.then_some("collapsed"));

    let link = |route: Route, label: &str| {
        let active = route == props.route;
        let short: String = label.chars().take(1).collect();
        html! {
            <li>
                <a href={route.href()} class={classes!("nav-link", active.then_some("active"))} title={label.to_string()}>
                    <span class="nav-short">{short}</span>
                    <span class="nav-label">{label.to_string()}</span>
                </a>
            </li>
        }
    };

    html! {
        <nav class={class} aria-label="Main navigation">
            <ul>
                {link(Route::Home, "Home")}
            </ul>
            <div class="nav-section">{"Yachts"}</div>
            <ul>
                {
                    props.catalog.yachts().iter().map(|yacht| {
                        link(Route::Yacht(yacht.id.clone()), &yacht.title)
                    }).collect::<Html>()
                }
            </ul>
        </nav>
    }
}
