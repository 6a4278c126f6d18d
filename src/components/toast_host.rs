use yew::prelude::*;

use crate::models::notification::Toasts;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Toasts,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-host" role="status" aria-live="polite">
            {
                props.toasts.items().iter().map(|(id, notification)| {
                    let id = *id;
                    let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);
                    let class = classes!("toast", notification.is_error.then_some("error"));
                    html! {
                        <div {class} key={id}>
                            <div class="toast-body">
                                <strong>{&notification.title}</strong>
                                if let Some(description) = &notification.description {
                                    <p>{description}</p>
                                }
                            </div>
                            <button class="toast-close" {onclick} aria-label="Close">{"×"}</button>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
