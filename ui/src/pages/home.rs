use payloads::UserId;
use yew::prelude::*;

use crate::components::{UserDetail, UserList};

/// User list with the selected user's details underneath.
#[function_component]
pub fn HomePage() -> Html {
    let selected = use_state(|| None::<UserId>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |user_id: UserId| selected.set(Some(user_id)))
    };

    html! {
        <main class="max-w-3xl mx-auto px-4 py-8 space-y-8">
            <UserList {on_select} />
            if let Some(id) = *selected {
                <div class="border-t border-neutral-200 dark:border-neutral-700 pt-6">
                    <UserDetail {id} />
                </div>
            }
        </main>
    }
}
