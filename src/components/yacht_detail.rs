use std::rc::Rc;
use yew::prelude::*;

use super::booking_panel::BookingPanel;
use crate::models::catalog::Catalog;
use crate::models::notification::Notification;
use crate::models::yacht::Yacht;
use crate::route::go_back;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    General,
    Technical,
    Amenities,
    Map,
}

impl Tab {
    const ALL: [Self; 4] = [Self::General, Self::Technical, Self::Amenities, Self::Map];

    fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Technical => "Technical",
            Self::Amenities => "Amenities",
            Self::Map => "Map",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct YachtDetailProps {
    pub catalog: Rc<Catalog>,
    pub id: String,
    pub on_notify: Callback<Notification>,
}

#[function_component(YachtDetail)]
pub fn yacht_detail(props: &YachtDetailProps) -> Html {
    let yacht = use_memo((props.catalog.clone(), props.id.clone()), |(catalog, id)| {
        catalog.find(id).cloned().map(Rc::new)
    });

    match &*yacht {
        // Keyed on the id so every visit starts with a fresh draft
        Some(yacht) => html! {
            <YachtPage key={yacht.id.clone()} yacht={yacht.clone()} on_notify={props.on_notify.clone()} />
        },
        None => html! {
            <div class="yacht-detail not-found">
                <BackButton />
                <p>{"Yacht not found."}</p>
            </div>
        },
    }
}

/// Returns to the previous page, like the browser's back button
#[function_component(BackButton)]
fn back_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| go_back());

    html! {
        <button class="back-link" {onclick}>{"‹ Back"}</button>
    }
}

#[derive(Properties, PartialEq)]
struct YachtPageProps {
    yacht: Rc<Yacht>,
    on_notify: Callback<Notification>,
}

#[function_component(YachtPage)]
fn yacht_page(props: &YachtPageProps) -> Html {
    let yacht = &props.yacht;
    let active_image = use_state(|| 0usize);
    let tab = use_state(|| Tab::General);

    let gallery = yacht.gallery();
    let selected_image = *active_image;
    let thumbnails = if gallery.len() > 1 {
        gallery
            .iter()
            .enumerate()
            .map(|(i, src)| {
                let class = classes!("thumbnail", (selected_image == i).then_some("active"));
                let active_image = active_image.clone();
                let onclick = Callback::from(move |_: MouseEvent| active_image.set(i));
                let label = format!("{} {}", yacht.title, i + 1);
                html! {
                    <button {class} {onclick} aria-label={label.clone()} key={i}>
                        <img src={(*src).to_string()} alt={label} />
                    </button>
                }
            })
            .collect::<Html>()
    } else {
        Html::default()
    };

    let tabs = Tab::ALL
        .iter()
        .map(|&t| {
            let tab = tab.clone();
            let class = classes!("tab", (*tab == t).then_some("active"));
            let onclick = Callback::from(move |_: MouseEvent| tab.set(t));
            html! { <button {class} {onclick} key={t.label()}>{t.label()}</button> }
        })
        .collect::<Html>();

    let tab_content = match *tab {
        Tab::General => html! {
            <div class="spec-grid">
                {
                    yacht.spec_rows().into_iter().map(|(label, value)| html! {
                        <div class="spec-card" key={label}>
                            <div class="muted small">{label}</div>
                            <div class="spec-value">{value}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        },
        Tab::Technical => html! {
            <table class="spec-table">
                <tbody>
                    {
                        yacht.spec_rows().into_iter().map(|(label, value)| html! {
                            <tr key={label}>
                                <td class="muted">{label}</td>
                                <td>{value}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        },
        Tab::Amenities if yacht.amenities.is_empty() => html! {
            <p class="muted">{"No amenity information available."}</p>
        },
        Tab::Amenities => html! {
            <ul class="amenities">
                {
                    yacht.amenities.iter().map(|a| html! {
                        <li key={a.label().to_string()}>{a.label().to_string()}</li>
                    }).collect::<Html>()
                }
            </ul>
        },
        Tab::Map => match yacht.coords {
            Some(coords) => html! {
                <iframe title="map" class="map-frame" src={coords.map_embed_url()} />
            },
            None => html! { <p class="muted">{"No map information available."}</p> },
        },
    };

    html! {
        <div class="yacht-detail">
            <div class="yacht-detail-top">
                <BackButton />
                <span class="muted">{"📍 "}{yacht.place()}</span>
            </div>

            <div class="yacht-detail-grid">
                <div class="yacht-main">
                    <div class="gallery">
                        <img class="gallery-main" src={yacht.image_at(selected_image).to_string()} alt={yacht.title.clone()} />
                        <div class="thumbnails">{thumbnails}</div>
                    </div>

                    <div class="yacht-info">
                        <h1>{&yacht.title}</h1>
                        <p>{&yacht.description}</p>
                        <div class="tabs" role="tablist">{tabs}</div>
                        <div class="tab-content">{tab_content}</div>
                    </div>
                </div>

                <BookingPanel yacht={yacht.clone()} on_notify={props.on_notify.clone()} />
            </div>
        </div>
    }
}
