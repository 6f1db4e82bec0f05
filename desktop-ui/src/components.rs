pub mod chat;
pub mod explorer;
pub mod game;
pub mod mail;
pub mod notepad;
pub mod terminal;

pub use chat::ChatView;
pub use explorer::ExplorerView;
pub use game::GameView;
pub use mail::MailView;
pub use notepad::NotepadView;
pub use terminal::TerminalView;
