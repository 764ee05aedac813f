pub mod load;
pub mod verify;

pub use load::LoadCommands;
pub use verify::VerifyCommands;
