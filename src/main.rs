use yew::prelude::*;

use yacht_booking::components::{Layout, ToastHost, YachtDetail, YachtList};
use yacht_booking::hooks::{use_route::use_route, use_toasts::use_toasts};
use yacht_booking::models::catalog::Catalog;
use yacht_booking::route::Route;

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::builtin());
    let route = use_route();
    let toasts = use_toasts();

    let page = match &route {
        Route::Home => html! { <YachtList catalog={catalog.clone()} /> },
        Route::Yacht(id) => html! {
            <YachtDetail catalog={catalog.clone()} id={id.clone()} on_notify={toasts.notify.clone()} />
        },
        Route::NotFound => html! {
            <div class="not-found">
                <p>{"Page not found."}</p>
                <a href={Route::Home.href()}>{"Back to the home page"}</a>
            </div>
        },
    };

    html! {
        <>
            <Layout {catalog} {route}>
                {page}
            </Layout>
            <ToastHost toasts={(*toasts.toasts).clone()} on_dismiss={toasts.dismiss.clone()} />

            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
