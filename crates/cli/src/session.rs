//! Blocking menu loop over any line reader / writer pair.

use std::io::{BufRead, Write};

use anyhow::Context;
use larder_inventory::{ExpirationDate, Inventory};

use crate::menu::{MENU, MenuChoice};
use crate::render;

const BANNER: &[&str] = &[
    "WELCOME!",
    "Refrigerator PathLock 2025!",
    "Note: Use the date format YYYY-MM-DD for expiration dates.",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session. Owns the inventory it drives.
#[derive(Debug)]
pub struct Session<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.output)
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        for line in BANNER {
            self.say(line)?;
        }
        self.say("")?;

        while self.step()? == Flow::Continue {}

        self.say("Exiting program. Goodbye!")?;
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn step(&mut self) -> anyhow::Result<Flow> {
        self.say("")?;
        for line in MENU {
            self.say(line)?;
        }
        let Some(answer) = self.ask("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(reason) => {
                tracing::debug!(%reason, "menu input rejected");
                self.say("Invalid choice. Please try again.")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Insert => self.insert(),
            MenuChoice::Consume => self.consume(),
            MenuChoice::Status => {
                let lines = render::status(&self.inventory);
                self.section(&lines)
            }
            MenuChoice::History => {
                let lines = render::history(&self.inventory);
                self.section(&lines)
            }
            MenuChoice::CheckExpired => self.check_expired(),
            MenuChoice::ShoppingList => self.shopping_list(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn insert(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.ask("Enter product name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.ask_quantity("Enter product quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = quantity else {
            return Ok(Flow::Continue);
        };
        let Some(date) = self.ask("Enter expiration date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        if !ExpirationDate::new(date.as_str()).is_iso_date() {
            tracing::warn!(
                date = %date,
                "expiration date is not YYYY-MM-DD; it may not sort chronologically"
            );
        }

        if let Err(err) = self.inventory.insert(name, quantity, date) {
            self.say(&render::error(&err))?;
        }
        Ok(Flow::Continue)
    }

    fn consume(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.ask("Enter product name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.ask_quantity("Enter quantity to consume: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = quantity else {
            return Ok(Flow::Continue);
        };

        if let Err(err) = self.inventory.consume(name, quantity) {
            self.say(&render::error(&err))?;
        }
        Ok(Flow::Continue)
    }

    fn check_expired(&mut self) -> anyhow::Result<Flow> {
        let Some(mut date) = self.ask("Enter current date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(Flow::Exit);
        };
        if date.is_empty() {
            date = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        }

        match self.inventory.expire_sweep(&date) {
            Ok(sweep) => {
                let lines = render::expiry_sweep(&sweep);
                self.section(&lines)
            }
            Err(err) => {
                self.say(&render::error(&err))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn shopping_list(&mut self) -> anyhow::Result<Flow> {
        match self.inventory.shopping_list() {
            Ok(list) => {
                let lines = render::shopping_list(&list);
                self.section(&lines)
            }
            Err(err) => {
                self.say(&render::error(&err))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn section(&mut self, lines: &[String]) -> anyhow::Result<Flow> {
        self.say("")?;
        for line in lines {
            self.say(line)?;
        }
        Ok(Flow::Continue)
    }

    /// `Ok(None)` on end of input, `Ok(Some(None))` on a non-numeric answer.
    fn ask_quantity(&mut self, prompt: &str) -> anyhow::Result<Option<Option<f64>>> {
        let Some(answer) = self.ask(prompt)? else {
            return Ok(None);
        };
        match answer.parse::<f64>() {
            Ok(quantity) => Ok(Some(Some(quantity))),
            Err(_) => {
                self.say("Invalid quantity. Please enter a number.")?;
                Ok(Some(None))
            }
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.output).context("failed to write output")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }
}
