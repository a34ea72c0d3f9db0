use payloads::UserId;
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{UseAsyncOptions, use_async},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: UserId,
}

/// Shows one user, refetching whenever `id` changes.
#[function_component]
pub fn UserDetail(props: &Props) -> Html {
    let id = props.id;
    let user = use_async(
        id,
        move || async move {
            let api_client = get_api_client();
            api_client.get_user(&id).await.map_err(|e| e.to_string())
        },
        UseAsyncOptions::default(),
    );

    {
        let error = user.state.error().cloned();
        use_effect_with(error, move |error| {
            if let Some(error) = error {
                tracing::warn!("Failed to load user {id}: {error}");
            }
        });
    }

    user.render("user", |user| {
        html! {
            <div class="space-y-1">
                <h2 class="text-xl font-semibold">{&user.username}</h2>
                <p>
                    <b>{"E-mail: "}</b>
                    {&user.email}
                </p>
            </div>
        }
    })
}
