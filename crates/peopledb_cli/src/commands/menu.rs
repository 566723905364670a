//! Interactive numbered menu.
//!
//! The menu reads one answer per line from any `BufRead` and writes
//! prompts and results to any `Write`, so it can be driven from tests.
//! Errors from the store (bad input values, missing files, empty charts)
//! are printed and the loop continues. Only allocation failures and
//! terminal I/O errors end the session with an error. End of input ends
//! the session normally.

use super::render::{write_indexed_table, write_table, TextChart};
use peopledb_core::{
    save, ChartField, ChartKind, ChartSeries, ChartSink, CoreError, PeopleStore, SortField,
    SortOrder,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const MENU: &str = "\
People Database Menu:
1. Add person
2. Remove person
3. Print database
4. Save to file
5. Sort database
6. Show charts
7. Open existing database
0. Exit";

/// Errors that end a menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    /// An unrecoverable store error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading answers or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One answer read from the input.
enum Reply<T> {
    Value(T),
    Invalid(String),
    Closed,
}

/// A menu session over a store.
pub struct Menu<R, W> {
    store: PeopleStore,
    input: R,
    out: W,
}

/// Runs a menu session on the given streams, loading `initial` first if set.
pub fn run<R: BufRead, W: Write>(
    initial: Option<&Path>,
    input: R,
    out: W,
) -> Result<(), MenuError> {
    let mut menu = Menu::new(PeopleStore::new()?, input, out);
    if let Some(path) = initial {
        menu.open_file(path)?;
    }
    menu.run()
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session over an existing store.
    pub fn new(store: PeopleStore, input: R, out: W) -> Self {
        Self { store, input, out }
    }

    /// Consumes the session, returning the store and the output stream.
    pub fn into_parts(self) -> (PeopleStore, W) {
        (self.store, self.out)
    }

    /// Runs the loop until the user exits or the input ends.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{MENU}")?;

            let choice = match self.ask::<u32>("Choice: ")? {
                Reply::Value(choice) => choice,
                Reply::Invalid(text) => {
                    writeln!(self.out, "Invalid choice: {text:?}")?;
                    continue;
                }
                Reply::Closed => return Ok(()),
            };

            let result = match choice {
                0 => return Ok(()),
                1 => self.add(),
                2 => self.remove(),
                3 => self.print().map(|()| Flow::Continue),
                4 => self.save(),
                5 => self.sort(),
                6 => self.chart(),
                7 => self.open(),
                _ => {
                    writeln!(self.out, "Invalid choice!")?;
                    Ok(Flow::Continue)
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(MenuError::Core(e)) if !e.is_fatal() => {
                    writeln!(self.out, "Error: {e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn add(&mut self) -> Result<Flow, MenuError> {
        let Some(name) = self.ask_line("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.ask_value::<i32>("Enter age: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(weight) = self.ask_value::<f64>("Enter weight: ")? else {
            return Ok(Flow::Exit);
        };
        let (Some(age), Some(weight)) = (age, weight) else {
            return Ok(Flow::Continue);
        };

        self.store.insert(&name, age, weight)?;
        debug!(name = %name, age, weight, "menu add");
        if let Some(person) = self.store.iter().last() {
            writeln!(self.out, "Added {person}")?;
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow, MenuError> {
        write_indexed_table(&mut self.out, self.store.records())?;
        let Some(index) = self.ask_value::<usize>("Enter index to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(index) = index else {
            return Ok(Flow::Continue);
        };

        match self.store.remove(index) {
            Some(person) => writeln!(self.out, "Removed {person}")?,
            None => writeln!(self.out, "No person at index {index}")?,
        }
        Ok(Flow::Continue)
    }

    fn print(&mut self) -> Result<(), MenuError> {
        write_table(&mut self.out, self.store.records())?;
        Ok(())
    }

    fn save(&mut self) -> Result<Flow, MenuError> {
        let Some(path) = self.ask_path("Enter filename to save: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(path) = path else {
            return Ok(Flow::Continue);
        };

        let written = save(&self.store, &path)?;
        writeln!(self.out, "Saved {written} records to {}", path.display())?;
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> Result<Flow, MenuError> {
        let Some(field) = self.ask_value::<u32>("Sort by:\n1. Name\n2. Age\n3. Weight\nChoice: ")?
        else {
            return Ok(Flow::Exit);
        };
        let field = match field {
            Some(1) => SortField::Name,
            Some(2) => SortField::Age,
            Some(3) => SortField::Weight,
            _ => {
                writeln!(self.out, "Invalid field selection!")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(order) = self.ask_value::<u32>("Order:\n1. Ascending\n2. Descending\nChoice: ")?
        else {
            return Ok(Flow::Exit);
        };
        let order = match order {
            Some(1) => SortOrder::Ascending,
            Some(2) => SortOrder::Descending,
            _ => {
                writeln!(self.out, "Invalid order selection!")?;
                return Ok(Flow::Continue);
            }
        };

        self.store.sort_by_field(field, order);
        writeln!(self.out, "Sorted by {field} ({order})")?;
        Ok(Flow::Continue)
    }

    fn chart(&mut self) -> Result<Flow, MenuError> {
        let Some(field) = self.ask_value::<u32>("Chart for:\n1. Age\n2. Weight\nChoice: ")? else {
            return Ok(Flow::Exit);
        };
        let field = match field {
            Some(1) => ChartField::Age,
            Some(2) => ChartField::Weight,
            _ => {
                writeln!(self.out, "Invalid choice! Please select 1 or 2.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(kind) = self.ask_value::<u32>("Chart type:\n1. Bar chart\n2. Pie chart\nChoice: ")?
        else {
            return Ok(Flow::Exit);
        };
        let kind = match kind {
            Some(1) => ChartKind::Bar,
            Some(2) => ChartKind::Pie,
            _ => {
                writeln!(self.out, "Invalid chart type selection!")?;
                return Ok(Flow::Continue);
            }
        };

        let series =
            ChartSeries::project(self.store.records(), field, kind).map_err(CoreError::from)?;
        TextChart::new(&mut self.out).draw(&series)?;
        Ok(Flow::Continue)
    }

    fn open(&mut self) -> Result<Flow, MenuError> {
        let Some(path) = self.ask_path("Enter filename to open: ")? else {
            return Ok(Flow::Exit);
        };
        if let Some(path) = path {
            self.open_file(&path)?;
        }
        Ok(Flow::Continue)
    }

    /// Replaces the store with the contents of `path`.
    ///
    /// On a recoverable error the current store is kept and the error is
    /// printed.
    fn open_file(&mut self, path: &Path) -> Result<(), MenuError> {
        match super::open(path) {
            Ok(store) => {
                writeln!(
                    self.out,
                    "Loaded {} records from {}",
                    store.len(),
                    path.display()
                )?;
                self.store = store;
            }
            Err(e) if !e.is_fatal() => writeln!(self.out, "Error: {e}")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Prompts and reads one trimmed line. `None` means the input ended.
    fn ask_line(&mut self, prompt: &str) -> Result<Option<String>, MenuError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<Reply<T>, MenuError> {
        Ok(match self.ask_line(prompt)? {
            None => Reply::Closed,
            Some(text) => match text.parse() {
                Ok(value) => Reply::Value(value),
                Err(_) => Reply::Invalid(text),
            },
        })
    }

    /// Like [`Self::ask`], reporting unparsable answers. The outer `None`
    /// means the input ended, the inner `None` that the answer was invalid.
    fn ask_value<T: FromStr>(&mut self, prompt: &str) -> Result<Option<Option<T>>, MenuError> {
        match self.ask(prompt)? {
            Reply::Value(value) => Ok(Some(Some(value))),
            Reply::Invalid(text) => {
                writeln!(self.out, "Invalid number: {text:?}")?;
                Ok(Some(None))
            }
            Reply::Closed => Ok(None),
        }
    }

    fn ask_path(&mut self, prompt: &str) -> Result<Option<Option<PathBuf>>, MenuError> {
        let Some(text) = self.ask_line(prompt)? else {
            return Ok(None);
        };
        if text.is_empty() {
            writeln!(self.out, "No filename given")?;
            return Ok(Some(None));
        }
        Ok(Some(Some(PathBuf::from(text))))
    }
}
