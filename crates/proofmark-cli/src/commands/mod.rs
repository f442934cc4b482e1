// crates/proofmark-cli/src/commands/mod.rs
//
// Command module declarations for the Proofmark CLI.

pub mod generate;
pub mod records;
pub mod status;
pub mod verify;
