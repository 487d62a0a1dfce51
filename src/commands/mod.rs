//! # Commands
//!
//! Task operations shared by the subcommands and the interactive shell.
//! Each writes its user-facing output to the given writer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod complete;
pub mod completions;
pub mod export;
pub mod list;
pub mod remind;
pub mod session;
pub mod setup;

pub use self::{
    add::{execute as add, AddArgs},
    complete::execute as complete,
    completions::execute as completions,
    export::execute as export,
    list::{execute as list, peek},
    remind::execute as remind,
    session::{open_store, save_store},
    setup::execute as setup,
};
