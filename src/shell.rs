//! # Interactive Shell
//!
//! The single-character menu loop run when `todo` is started without a
//! subcommand. Input and output are generic so the loop can be driven from
//! tests as well as a terminal.
//!
//! Operation failures are printed and the loop continues. Quitting saves the
//! task file; end of input behaves like quitting.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{BufRead, Write};

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::{
    commands::{self, AddArgs},
    config::Config,
    constants::{DATETIME_HINT, PRIORITY_HIGHEST, PRIORITY_LOWEST},
    task::{self, TaskStore},
    ui,
};

const MENU: &str = "\
a. Add Task
r. Remove Task
v. View Tasks
p. Peek Task
x. Export Tasks to CSV
e. Exit";

/// Interactive session over a loaded store.
pub struct Shell<R, W> {
    config: Config,
    store: TaskStore,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: Config, store: TaskStore, input: R, out: W) -> Self {
        Self {
            config,
            store,
            input,
            out,
        }
    }

    /// Runs until the user exits. Returns the final store.
    ///
    /// Fails only if output cannot be written, or if input ends and the
    /// final save fails.
    pub fn run(mut self) -> Result<TaskStore> {
        writeln!(self.out, "\n{}", "--- Task Reminders on Startup ---".bold())?;
        commands::remind(&self.store, &mut self.out)?;

        loop {
            write!(
                self.out,
                "\n{}\n{MENU}\nEnter your choice: ",
                "Smart To-Do List".bold()
            )?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed, saving and exiting");
                commands::save_store(&self.store, &self.config)?;
                writeln!(self.out, "\n{}", ui::success("Tasks saved. Goodbye!"))?;
                break;
            };

            let Some(choice) = line.trim().chars().next() else {
                continue;
            };

            let result = match choice.to_ascii_lowercase() {
                'a' => self.add(),
                'r' => commands::complete(&mut self.store, &mut self.out),
                'v' => commands::list(&self.store, &mut self.out),
                'p' => commands::peek(&self.store, &mut self.out),
                'x' => commands::export(&self.store, &self.config.export_file, &mut self.out),
                'e' => match commands::save_store(&self.store, &self.config) {
                    Ok(()) => {
                        writeln!(self.out, "{}", ui::success("Tasks saved. Goodbye!"))?;
                        break;
                    }
                    Err(err) => Err(err),
                },
                _ => {
                    writeln!(self.out, "{}", ui::warning("Invalid option. Try again."))?;
                    Ok(())
                }
            };

            if let Err(err) = result {
                writeln!(self.out, "{}", ui::error(&err))?;
            }
        }

        Ok(self.store)
    }

    /// Prompts for description, priority, and due date, then inserts.
    fn add(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Enter Task Description: ")? else {
            return Ok(());
        };

        let Some(priority) = self.prompt(&format!(
            "Enter Priority ({PRIORITY_HIGHEST}-{PRIORITY_LOWEST}, {PRIORITY_HIGHEST} = Highest): "
        ))?
        else {
            return Ok(());
        };
        let Ok(priority) = priority.trim().parse::<i32>() else {
            writeln!(self.out, "{}", ui::warning("Invalid priority"))?;
            return Ok(());
        };
        if !task::is_valid_priority(priority) {
            writeln!(
                self.out,
                "{}",
                ui::warning(&format!(
                    "Invalid priority! Please enter {PRIORITY_HIGHEST} to {PRIORITY_LOWEST}."
                ))
            )?;
            return Ok(());
        }

        let Some(due) = self.prompt(&format!(
            "Enter Due Date and Time ({DATETIME_HINT}) or leave empty: "
        ))?
        else {
            return Ok(());
        };
        let due = due.trim();

        let args = AddArgs {
            description,
            priority,
            due: (!due.is_empty()).then(|| due.to_string()),
        };
        commands::add(&mut self.store, &args, &mut self.out)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
