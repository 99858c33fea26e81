pub mod intake;
pub mod meta;
pub mod report;
