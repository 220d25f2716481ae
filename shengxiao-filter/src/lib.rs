pub mod engine;
pub mod notify;
pub mod ranking;
pub mod search;
pub mod session;
pub mod tokens;
pub mod vocabulary;
