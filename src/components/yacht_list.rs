use std::rc::Rc;
use yew::prelude::*;

use crate::models::catalog::Catalog;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct YachtListProps {
    pub catalog: Rc<Catalog>,
}

/// Landing page: one card per yacht in the catalog
#[function_component(YachtList)]
pub fn yacht_list(props: &YachtListProps) -> Html {
    html! {
        <section class="yacht-list">
            <h1>{"Yacht charters"}</h1>
            <div class="yacht-grid">
                {
                    props.catalog.yachts().iter().map(|yacht| html! {
                        <a class="yacht-card" href={Route::Yacht(yacht.id.clone()).href()} key={yacht.id.clone()}>
                            <img src={yacht.image.clone()} alt={yacht.title.clone()} />
                            <div class="yacht-card-body">
                                <h2>{&yacht.title}</h2>
                                <p class="muted">{yacht.place()}</p>
                                <p class="yacht-card-price">
                                    {format!("{} {}", yacht.price, yacht.currency_symbol())}
                                    <span class="muted">{" / day · up to "}{yacht.capacity}{" guests"}</span>
                                </p>
                            </div>
                        </a>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
