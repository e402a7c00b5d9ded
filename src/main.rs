#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # calcmedias
//!
//! Enter each student's work, activity and exam grades (whole numbers from 0
//! to 10) and get the weighted final average, rounded half-up:
//!
//! ```text
//! final = round(work * 0.4 + activity * 0.3 + exam * 0.3)
//! ```
//!
//! `calcmedias shell` keeps a running list for the session; nothing is saved
//! when it ends.

use std::io::{self, IsTerminal};

use anyhow::Result;
use bpaf::*;
use calcmedias::{
    GradeForm, GradingConfig, Session, commands,
    config::{self, Settings},
    shell::{Shell, banner},
};
use dotenvy::dotenv;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Validate one set of grades and print the result
    Calc {
        /// Print JSON instead of a table
        json:     bool,
        /// Student name
        name:     String,
        /// Work grade
        work:     String,
        /// Activity grade
        activity: String,
        /// Exam grade
        exam:     String,
    },
    /// Start an interactive session
    Shell,
    /// Print the grading configuration
    Info,
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Opts {
    /// Disable ANSI colors
    no_color: bool,
    /// Command to run
    cmd:      Cmd,
}

/// Parse the command line arguments and return the options
fn options() -> Opts {
    /// parses a grade as raw text; validation happens later. `any` so that
    /// negative numbers like `-1` reach validation instead of being read as
    /// flags
    fn grade(meta: &'static str, help: &'static str) -> impl Parser<String> {
        any::<String, _, _>(meta, Some).help(help)
    }

    /// parses the student name
    fn n() -> impl Parser<String> {
        positional("NAME").help("Student name, quoted if it has spaces")
    }

    let json = long("json").help("Print JSON instead of a table").switch();
    let name = n();
    let work = grade("WORK", "Work grade, weighs 40%");
    let activity = grade("ACTIVITY", "Activity grade, weighs 30%");
    let exam = grade("EXAM", "Exam grade, weighs 30%");

    let calc = construct!(Cmd::Calc {
        json,
        name,
        work,
        activity,
        exam
    })
    .to_options()
    .command("calc")
    .help("Compute the final average of one student");

    let shell = pure(Cmd::Shell)
        .to_options()
        .command("shell")
        .help("Start an interactive session");

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Prints a JSON description of the grading configuration");

    let cmd = construct!([calc, shell, info]);
    let no_color = long("no-color").help("Disable colored output").switch();

    construct!(Opts { no_color, cmd })
        .to_options()
        .descr("Weighted final average calculator")
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let settings = config::ensure_initialized()?;
    let color = settings.color() && !opts.no_color;
    let settings = config::install(Settings::clone(&settings).with_color(color))?;
    if !settings.color() {
        colored::control::set_override(false);
    }

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_ansi(settings.color() && io::stderr().is_terminal())
        .with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(fmt)
        .with(settings.log_level())
        .init();

    match opts.cmd {
        Cmd::Calc {
            json,
            name,
            work,
            activity,
            exam,
        } => {
            let form = GradeForm::builder()
                .name(name)
                .work(work)
                .activity(activity)
                .exam(exam)
                .build();
            let valid = commands::calc(
                &form,
                &GradingConfig::default(),
                json,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            if !valid {
                std::process::exit(1);
            }
        }
        Cmd::Shell => {
            if io::stdin().is_terminal() {
                println!("{}", banner());
            }
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Shell::new(Session::new(GradingConfig::default()), stdin, stdout).run()?;
        }
        Cmd::Info => {
            println!("{}", commands::info_json(&GradingConfig::default())?);
        }
    };

    Ok(())
}
