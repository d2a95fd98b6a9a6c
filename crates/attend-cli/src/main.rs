use std::path::PathBuf;

use attend_cli::commands;
use attend_cli::config::{self, OutputFormat};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Score adult ADHD self-assessment questionnaires.
#[derive(Debug, Parser)]
#[command(name = "attend", version, about)]
struct Cli {
    /// Config file (defaults to <config dir>/attend/config.json).
    #[arg(long, global = true, env = "ATTEND_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an answers file and print the assessment.
    Score {
        /// JSON object of question id to response level.
        answers: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Tera template for `--format report`.
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Check that every answer is within its questionnaire's scale.
    Validate { answers: PathBuf },
    /// List questionnaire items.
    Questions {
        /// asrs, structured_criteria or executive_functions.
        instrument: Option<String>,
    },
    /// Write a default config file.
    InitConfig {
        #[arg(long)]
        force: bool,
    },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Score {
            answers,
            format,
            template,
        } => {
            let mut cfg = config::load_config(&config_path)?;
            if template.is_some() {
                cfg.template_path = template;
            }
            let answers = commands::read_answers(&answers)?;
            let output = commands::score(
                &answers,
                &cfg,
                format.unwrap_or(cfg.output),
                jiff::Timestamp::now(),
            )?;
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
        }
        Command::Validate { answers } => {
            let answers = commands::read_answers(&answers)?;
            let errors = commands::validate(&answers);
            for error in &errors {
                eprintln!("{error}");
            }
            if !errors.is_empty() {
                return Err(eyre::eyre!("{} answer(s) out of range", errors.len()));
            }
            println!("all {} answers are within range", answers.len());
        }
        Command::Questions { instrument } => {
            print!("{}", commands::questions(instrument.as_deref())?);
        }
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                return Err(eyre::eyre!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                ));
            }
            config::save_config(&config_path, &config::AttendConfig::default())?;
            println!("wrote {}", config_path.display());
        }
    }

    Ok(())
}
