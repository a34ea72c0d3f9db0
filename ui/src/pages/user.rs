use payloads::UserId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, components::UserDetail};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: u64,
}

#[function_component]
pub fn UserPage(props: &Props) -> Html {
    html! {
        <main class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <UserDetail id={UserId(props.id)} />
            <Link<Route> to={Route::Home} classes="text-sm hover:underline">
                {"Back to all users"}
            </Link<Route>>
        </main>
    }
}
