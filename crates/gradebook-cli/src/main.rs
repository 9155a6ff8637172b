//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod render;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Student record manager: courses, grades and GPAs"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Snapshot file to read and save (overrides the config)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student
    AddStudent {
        /// Student email (unique identifier)
        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },

    /// Add a course to the catalog
    AddCourse {
        /// Course name (unique identifier)
        #[arg(long)]
        name: String,

        /// Term label, e.g. "Fall"
        #[arg(long)]
        term: String,

        /// Credit count
        #[arg(long)]
        credits: u32,
    },

    /// Register a student for a course
    Enroll {
        #[arg(long)]
        email: String,

        #[arg(long)]
        course: String,
    },

    /// Record a grade for an enrolled student
    Grade {
        #[arg(long)]
        email: String,

        #[arg(long)]
        course: String,

        #[arg(long)]
        grade: f64,
    },

    /// Print transcripts
    Transcript {
        /// Student email (repeatable)
        #[arg(long, required = true)]
        email: Vec<String>,
    },

    /// Rank students by GPA
    Rank {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Find students with a given grade in a course
    Search {
        #[arg(long)]
        course: String,

        #[arg(long)]
        grade: f64,
    },

    /// List all courses
    Courses {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Per-course grade statistics
    Summary,

    /// Interactive menu
    Shell,

    /// Create a starter gradebook.toml
    Init,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "gradebook=debug"
    } else {
        "gradebook=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let data_file = cli.data_file;

    let result = match cli.command {
        Commands::AddStudent {
            email,
            first_name,
            last_name,
        } => commands::add::student(config, data_file, email, first_name, last_name),
        Commands::AddCourse {
            name,
            term,
            credits,
        } => commands::add::course(config, data_file, name, term, credits),
        Commands::Enroll { email, course } => {
            commands::enroll::execute(config, data_file, &email, &course)
        }
        Commands::Grade {
            email,
            course,
            grade,
        } => commands::grade::execute(config, data_file, &email, &course, grade),
        Commands::Transcript { email } => commands::transcript::execute(config, data_file, &email),
        Commands::Rank { format } => commands::rank::execute(config, data_file, &format),
        Commands::Search { course, grade } => {
            commands::search::execute(config, data_file, &course, grade)
        }
        Commands::Courses { format } => commands::courses::execute(config, data_file, &format),
        Commands::Summary => commands::summary::execute(config, data_file),
        Commands::Shell => commands::shell::execute(config, data_file),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
