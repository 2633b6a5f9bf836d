//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_account;
pub mod create_chatroom;
pub mod create_post;
pub mod delete_chatroom;
pub mod error;
pub mod grant_user_access;
pub mod list_accounts;
pub mod list_chatrooms;
pub mod list_posts;
pub mod list_users_with_access;
pub mod update_chatroom;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_account::CreateAccountUseCase;
pub use create_chatroom::CreateChatroomUseCase;
pub use create_post::CreatePostUseCase;
pub use delete_chatroom::DeleteChatroomUseCase;
pub use error::UseCaseError;
pub use grant_user_access::GrantUserAccessUseCase;
pub use list_accounts::ListAccountsUseCase;
pub use list_chatrooms::{ListAllChatroomsUseCase, ListChatroomsForAccountUseCase};
pub use list_posts::ListPostsUseCase;
pub use list_users_with_access::ListUsersWithAccessUseCase;
pub use update_chatroom::UpdateChatroomUseCase;
