pub mod build;
pub mod init;
pub mod reset;
pub mod set;

pub use build::{build, BuildArgs};
pub use init::{init, InitArgs};
pub use reset::{reset, ResetArgs};
pub use set::{set, SetArgs};
