pub mod fetch_state;
pub mod use_async;

pub use fetch_state::{FetchAction, FetchState};
pub use use_async::{UseAsyncHandle, UseAsyncOptions, use_async};
