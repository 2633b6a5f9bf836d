//! InMemory Repository 実装
//!
//! ドメイン層が定義する Repository trait の具体的な実装。
//! 各コレクションを `tokio::sync::Mutex` で保護した Vec をインメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! 現在、ドメインモデルを直接ストレージとして使用しています。
//! 永続化 DB を実装する際は `DB Row → DTO → ドメインモデル` の変換層が必要になります。

mod account;
mod chatroom;
mod post;
mod user_access;

pub use account::InMemoryAccountRepository;
pub use chatroom::InMemoryChatroomRepository;
pub use post::InMemoryPostRepository;
pub use user_access::InMemoryUserAccessRepository;
