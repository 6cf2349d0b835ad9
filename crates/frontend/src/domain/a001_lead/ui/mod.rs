pub mod intake;
pub mod list;
