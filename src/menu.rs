//! Interactive numbered menu
//!
//! Reads from any `BufRead` and writes to any `Write`, so the loop can be
//! driven by a script as well as by a terminal.

use crate::cli::Action;
use crate::config::MenuConfig;
use crate::constants::{
    MENU_GOODBYE, MENU_INVALID_CHOICE, MENU_PRESS_ENTER, MENU_PROMPT, MENU_RULE_WIDTH, MENU_TITLE,
};
use crate::tools::DateTimeConverter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub struct Menu<R, W> {
    input: R,
    output: W,
    converter: DateTimeConverter,
    pause_after_result: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: &MenuConfig) -> Self {
        Self {
            input,
            output,
            converter: DateTimeConverter::new(config.format_set()),
            pause_after_result: config.pause_after_result,
        }
    }

    /// Loop until `0` is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.read_line(MENU_PROMPT)? else {
                break;
            };

            if choice.trim() == "0" {
                break;
            }

            match Action::from_menu_choice(&choice) {
                Some(action) => {
                    if !self.run_action(action)? {
                        break;
                    }
                }
                None => writeln!(self.output, "{}", MENU_INVALID_CHOICE)?,
            }

            if self.pause_after_result {
                writeln!(self.output)?;
                if self.read_line(MENU_PRESS_ENTER)?.is_none() {
                    break;
                }
            }
        }

        writeln!(self.output, "{}", MENU_GOODBYE)?;
        self.output.flush().context("Failed to flush output")
    }

    /// Returns `false` when input ended at the prompt
    fn run_action(&mut self, action: Action) -> Result<bool> {
        let text = match action.prompt() {
            Some(prompt) => match self.read_line(prompt)? {
                Some(text) => text,
                None => return Ok(false),
            },
            None => String::new(),
        };

        log::info!("Menu option {} ({:?})", action.menu_number(), action);
        let result = action.render(&text, &self.converter);

        writeln!(self.output, "{}: {}", action.result_label(), result)?;
        Ok(true)
    }

    fn show_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(MENU_RULE_WIDTH);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "{:^width$}", MENU_TITLE, width = MENU_RULE_WIDTH)?;
        writeln!(self.output, "{}", rule)?;
        for action in Action::ALL {
            writeln!(self.output, "{}. {}", action.menu_number(), action.title())?;
        }
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    /// Prompt and read one line without its line ending, `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
