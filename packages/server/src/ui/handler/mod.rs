//! Handler modules for HTTP endpoints.

pub mod account;
pub mod chatroom;
pub mod health;
pub mod post;
pub mod user_access;

pub use account::{create_account, list_accounts};
pub use chatroom::{
    create_chatroom, delete_chatroom, list_all_chatrooms, list_chatrooms_for_account,
    update_chatroom,
};
pub use health::health_check;
pub use post::{create_post, list_posts};
pub use user_access::{grant_user_access, list_users_with_access};
