pub mod chat;
pub mod init;
pub mod intake;
pub mod report;
pub mod serve;
