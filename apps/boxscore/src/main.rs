use anyhow::Result;
use boxscore_engine::{Command, CommandOutcome, Engine, RunConfig, apply_command};
use boxscore_ingest_roster::RosterFile;
use boxscore_render::TextReportRenderer;
use boxscore_tree::PlayerDirectory;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boxscore")]
#[command(about = "Build fixed-width batting reports from plain-text rosters.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: AppCommand,
}

#[derive(Subcommand, Debug)]
enum AppCommand {
    /// Read a roster file and write the team report.
    Run {
        /// Input roster file, one player per line.
        #[arg(long)]
        roster: PathBuf,
        /// Report output path. Defaults to the config value, then ./report.txt.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write a JSON export of the parsed roster.
        #[arg(long)]
        json: Option<PathBuf>,
        /// Optional YAML config with default output paths.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Open an interactive session (remove/print/quit) after the report.
        #[arg(long)]
        interactive: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        AppCommand::Run {
            roster,
            out,
            json,
            config,
            interactive,
        } => {
            let defaults = match config {
                Some(path) => RunConfig::load(&path)?,
                None => RunConfig::default(),
            };
            let out = out.unwrap_or(defaults.out);
            let json = json.or(defaults.json);

            let renderer = TextReportRenderer;
            let engine = Engine::new(&renderer);
            let mut source = RosterFile::new(&roster);

            let (mut directory, outputs) = engine.run(&mut source, &out, json.as_deref())?;

            println!("wrote:");
            println!("- {}", outputs.report_path.display());
            if let Some(path) = outputs.json_path {
                println!("- {}", path.display());
            }

            if interactive {
                run_session(&mut directory)?;
            }
        }
    }

    Ok(())
}

/// Drive the remove/print/quit loop over stdin until `quit` or EOF.
fn run_session(directory: &mut PlayerDirectory) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "boxscore> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session like `quit`
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match apply_command(directory, &command) {
            CommandOutcome::Removed(true) => println!("Player was removed."),
            CommandOutcome::Removed(false) => println!("No player by that name was found."),
            CommandOutcome::TreeShape(shape) => print!("{shape}"),
            CommandOutcome::Quit => break,
        }
    }
    Ok(())
}
