pub mod dispatch;
pub mod init;
pub mod language;
pub mod ping;
pub mod plugin;
pub mod project;
pub mod pull;
pub mod push;
pub mod resource;
