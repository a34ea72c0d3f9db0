use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod pages;

pub use logs::init_logging;

use pages::{DeferredUsersPage, HomePage, UserPage};

const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Base URL of the users API, set at build time through `API_URL`.
pub fn api_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_URL)
}

// Global API client
pub fn get_api_client() -> APIClient {
    APIClient {
        address: api_url().to_string(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <nav class="max-w-3xl mx-auto px-4 pt-6 flex gap-4 text-sm">
                    <Link<Route> to={Route::Home}>{"Users"}</Link<Route>>
                    <Link<Route> to={Route::Deferred}>{"Load on demand"}</Link<Route>>
                </nav>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/deferred")]
    Deferred,
    #[at("/users/:id")]
    User { id: u64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Deferred => html! { <DeferredUsersPage /> },
        Route::User { id } => html! { <UserPage {id} /> },
        Route::NotFound => html! {
            <main class="max-w-3xl mx-auto px-4 py-8">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                    <p class="text-gray-600 dark:text-gray-300">{"Page not found"}</p>
                </div>
            </main>
        },
    }
}
