#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::{
    config,
    constants::labels,
    grade::{Field, GradeForm},
    present::{field_label, render_errors},
    session::Session,
    types::StudentId,
};

/// Help text listing the shell commands.
const HELP: &str = "\
Comandos:
  add                  registra um aluno (pede nome e notas)
  remove <n|id>        remove o aluno na posição n ou com o id indicado
  list                 mostra os resultados da sessão
  json                 mostra os resultados em JSON
  help                 mostra esta ajuda
  quit                 encerra a sessão";

/// Shortest identifier prefix accepted by `remove`.
const MIN_PREFIX: usize = 4;

/// Length of a shortened identifier, see [`StudentId::short`]. An all-digit
/// target shorter than this is only ever read as a position.
const SHORT_ID_LEN: usize = 8;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enter a new record.
    Add,
    /// Remove a record by position or identifier.
    Remove(String),
    /// Show the results table.
    List,
    /// Show the results as JSON.
    Json,
    /// Show the help text.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match head.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "add" | "a" => Command::Add,
            "remove" | "rm" | "r" => Command::Remove(rest.trim().to_string()),
            "list" | "ls" | "l" => Command::List,
            "json" => Command::Json,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Whether the loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading.
    Stop,
}

/// Line-oriented front end that drives a [`Session`] from any reader and
/// writes to any writer.
pub struct Shell<R, W> {
    /// The session being driven.
    session: Session,
    /// Source of user input.
    input:   R,
    /// Destination of everything shown to the user.
    output:  W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell around `session`.
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Reads and runs commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", HELP)?;
        loop {
            write!(self.output, "{} ", paint(">", |t| t.bold()))?;
            self.output.flush().context("Could not flush output")?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if self.execute(Command::parse(&line))? == Flow::Stop {
                break;
            }
        }
        Ok(())
    }

    /// Hands the session back, e.g. to inspect it after the loop ends.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Runs a single command.
    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add => return self.add(),
            Command::Remove(target) => self.remove(&target)?,
            Command::List => writeln!(self.output, "{}", self.session.render())?,
            Command::Json => {
                let json = self
                    .session
                    .render_json()
                    .context("Could not serialize records")?;
                writeln!(self.output, "{json}")?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Stop),
            Command::Empty => {}
            Command::Unknown(line) => {
                tracing::warn!("Unknown command: {line}");
                writeln!(self.output, "Comando desconhecido: `{line}`. Digite `help`.")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompts for every form field, then submits the form.
    fn add(&mut self) -> Result<Flow> {
        let mut form = GradeForm::default();
        for field in [Field::Name, Field::Work, Field::Activity, Field::Exam] {
            let Some(value) = self.prompt(field_label(field))? else {
                return Ok(Flow::Stop);
            };
            match field {
                Field::Name => form.name = value,
                Field::Work => form.work = value,
                Field::Activity => form.activity = value,
                Field::Exam => form.exam = value,
            }
        }

        match self.session.submit(&form) {
            Ok(record) => {
                let line = format!(
                    "Registrado: {} (média final {})",
                    record.name(),
                    record.final_average()
                );
                writeln!(self.output, "{}", paint(&line, |t| t.green()))?;
                writeln!(self.output, "{}", self.session.render())?;
            }
            Err(errors) => {
                writeln!(self.output, "{}", paint("Corrija os campos abaixo:", |t| t.red()))?;
                writeln!(self.output, "{}", render_errors(&errors))?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Removes the record named by `target` and shows the remaining ones.
    fn remove(&mut self, target: &str) -> Result<()> {
        if target.is_empty() {
            writeln!(self.output, "Uso: remove <n|id>")?;
            return Ok(());
        }

        match self.resolve(target) {
            Some(id) => {
                self.session.remove(id);
                writeln!(self.output, "{}", self.session.render())?;
            }
            None => writeln!(self.output, "Nenhum aluno corresponde a `{target}`.")?,
        }
        Ok(())
    }

    /// Turns a position, a full identifier, or a unique identifier prefix
    /// into an identifier of a stored record. Short numbers are always
    /// positions; an all-digit prefix must be a full short id.
    fn resolve(&self, target: &str) -> Option<StudentId> {
        let store = self.session.store();
        if let Ok(position) = target.parse::<usize>() {
            if let Some(id) = store.id_at(position) {
                return Some(id);
            }
            if target.len() < SHORT_ID_LEN {
                return None;
            }
        }
        if let Ok(id) = target.parse::<StudentId>() {
            return store.get(id).map(|r| r.id());
        }
        if target.len() < MIN_PREFIX {
            return None;
        }

        let prefix = target.to_ascii_lowercase();
        let mut matches = store
            .list()
            .filter(|r| r.id().short().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Some(record.id()),
            _ => None,
        }
    }

    /// Shows `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush().context("Could not flush output")?;
        self.read_line()
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Applies `style` to `text` unless colors are turned off in the process
/// settings.
fn paint(text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
    if config::get().color() {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Default greeting printed above the first prompt.
pub fn banner() -> String {
    format!("{} | {}", paint("CalcMédias", |t| t.bold()), labels::RESULTS_TITLE)
}
