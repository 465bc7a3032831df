//! Interactive menu loop.
//!
//! The session owns the inventory for its whole lifetime and is generic over
//! its reader/writer so tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use stockroom_core::DomainError;
use stockroom_inventory::{Inventory, Listing, Product, ProductId, ProductUpdate};

use crate::input::{self, InputError};
use crate::menu::MenuChoice;

/// Whether the loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run until the operator exits or input ends.
    ///
    /// Store and input errors are reported to the operator and the loop
    /// continues; only I/O failures on the reader or writer are returned.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("inventory session started");
        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Select an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid option, please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        tracing::info!(products = self.inventory.len(), "inventory session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Update => self.update(),
            MenuChoice::Search => self.search(),
            MenuChoice::List => self.list().map(|()| Flow::Continue),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt("Quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Price: ")? else {
            return Ok(Flow::Exit);
        };

        let parsed = input::parse_quantity(&quantity)
            .and_then(|q| input::parse_price(&price).map(|p| (q, p)));
        let (quantity, price) = match parsed {
            Ok(values) => values,
            Err(e) => {
                self.report_input_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let added = self
            .inventory
            .add(id.trim(), name.trim(), quantity, price)
            .map(|_| ());
        match added {
            Ok(()) => writeln!(self.output, "Product added.")?,
            Err(e) => self.report_domain_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("ID of the product to remove: ")? else {
            return Ok(Flow::Exit);
        };

        match self.inventory.remove(&ProductId::new(id.trim())) {
            Ok(_) => writeln!(self.output, "Product removed.")?,
            Err(e) => self.report_domain_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("ID of the product to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt("New quantity (blank to keep): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("New price (blank to keep): ")? else {
            return Ok(Flow::Exit);
        };

        let parsed = input::parse_optional_quantity(&quantity).and_then(|quantity| {
            input::parse_optional_price(&price).map(|price| ProductUpdate { quantity, price })
        });
        let update = match parsed {
            Ok(update) => update,
            Err(e) => {
                self.report_input_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.inventory.update(&ProductId::new(id.trim()), update) {
            Ok(report) if report.is_complete() => writeln!(self.output, "Product updated.")?,
            Ok(report) => {
                for rejected in &report.rejected {
                    self.report_domain_error(rejected)?;
                }
                writeln!(
                    self.output,
                    "Product updated; rejected fields were left unchanged."
                )?;
            }
            Err(e) => self.report_domain_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(fragment) = self.prompt("Name to search for: ")? else {
            return Ok(Flow::Exit);
        };

        let matches = self.inventory.find_by_name(fragment.trim());
        if matches.is_empty() {
            writeln!(self.output, "No products matched that name.")?;
        } else {
            writeln!(self.output, "\nMatches:")?;
            write_products(&mut self.output, matches)?;
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<()> {
        match self.inventory.list_all() {
            Listing::Empty => writeln!(self.output, "Inventory is empty."),
            Listing::Records(records) => {
                writeln!(self.output, "\n=== CURRENT INVENTORY ===")?;
                write_products(&mut self.output, records)
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n===== INVENTORY =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Print `label` and read one line. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn report_input_error(&mut self, err: &InputError) -> io::Result<()> {
        tracing::debug!(error = %err, "malformed input");
        writeln!(self.output, "Error: {err}")
    }

    fn report_domain_error(&mut self, err: &DomainError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")
    }
}

fn write_products<'a, W: Write>(
    output: &mut W,
    products: impl IntoIterator<Item = &'a Product>,
) -> io::Result<()> {
    for product in products {
        writeln!(output, "{product}")?;
    }
    Ok(())
}
