pub mod user_detail;
pub mod user_list;

pub use user_detail::UserDetail;
pub use user_list::UserList;
