use payloads::UserId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route, get_api_client,
    hooks::{UseAsyncOptions, use_async},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Wait for the user to ask before fetching the list
    #[prop_or(false)]
    pub deferred: bool,
    /// Called with the clicked user. Without it, entries link to the user
    /// page instead.
    #[prop_or_default]
    pub on_select: Option<Callback<UserId>>,
}

#[function_component]
pub fn UserList(props: &Props) -> Html {
    let users = use_async(
        (),
        || async {
            let api_client = get_api_client();
            api_client.get_users().await.map_err(|e| e.to_string())
        },
        UseAsyncOptions {
            skip: props.deferred,
        },
    );

    let is_loading = users.state.is_loading();
    let on_reload = users.refetch.reform(|_: MouseEvent| ());
    let on_select = props.on_select.clone();

    let content = users.render("users", move |users| {
        html! {
            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {for users.iter().map(|user| {
                    let label = format!("{} ({})", user.username, user.name);
                    let entry = match &on_select {
                        Some(on_select) => {
                            let user_id = user.id;
                            let onclick = on_select
                                .reform(move |_: MouseEvent| user_id);
                            html! {
                                <button
                                    {onclick}
                                    class="text-left w-full hover:underline"
                                >
                                    {label}
                                </button>
                            }
                        }
                        None => html! {
                            <Link<Route>
                                to={Route::User { id: user.id.0 }}
                                classes="hover:underline"
                            >
                                {label}
                            </Link<Route>>
                        },
                    };
                    html! {
                        <li key={user.id.to_string()} class="py-2">
                            {entry}
                        </li>
                    }
                })}
            </ul>
        }
    });

    // the prompt view already offers its own load button
    let show_reload = !users.state.is_idle();

    html! {
        <section class="space-y-4">
            {content}
            if show_reload {
                <button
                    onclick={on_reload}
                    disabled={is_loading}
                    class="px-4 py-2 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md text-sm \
                           font-medium text-neutral-700 dark:text-neutral-300 \
                           bg-white dark:bg-neutral-700 \
                           hover:bg-neutral-50 dark:hover:bg-neutral-600 \
                           disabled:opacity-50"
                >
                    {"Reload"}
                </button>
            }
        </section>
    }
}
