pub use super::account::Entity as Account;
pub use super::chat::Entity as Chat;
pub use super::chat_member::Entity as ChatMember;
pub use super::message::Entity as Message;
pub use super::server::Entity as Server;
pub use super::server_member::Entity as ServerMember;
