pub mod deferred_users;
pub mod home;
pub mod user;

pub use deferred_users::DeferredUsersPage;
pub use home::HomePage;
pub use user::UserPage;
