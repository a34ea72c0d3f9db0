use yew::prelude::*;

use crate::components::UserList;

#[function_component]
pub fn DeferredUsersPage() -> Html {
    html! {
        <main class="max-w-3xl mx-auto px-4 py-8">
            <UserList deferred={true} />
        </main>
    }
}
