//! REPL command parsing and dispatch

use clap::{Parser, Subcommand, ValueEnum};

use crate::CliContext;
use crate::commands;
use crate::region::Region;

#[derive(Parser)]
#[command(version, about = "Boss refresh countdowns")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Switch {
    On,
    Off,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the boss table
    #[command(alias = "ls")]
    List,
    /// Track a new boss
    Add {
        map: String,
        level: String,
        /// Refresh interval as H:M:S, M:S or S
        #[arg(allow_hyphen_values = true)]
        interval: String,
    },
    /// Change a boss. Omitted fields keep their current value
    Edit {
        id: u64,
        #[arg(short, long)]
        map: Option<String>,
        #[arg(short, long)]
        level: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        interval: Option<String>,
    },
    /// Select or deselect one boss
    Toggle { id: u64 },
    SelectAll,
    DeselectAll,
    /// Start timers for the selected bosses
    #[command(alias = "reset")]
    Start,
    /// Delete the selected bosses
    Delete {
        /// Skip the confirmation step
        #[arg(short, long)]
        yes: bool,
    },
    /// Click a table region; omit the id to click the column header
    Click { region: Region, id: Option<u64> },
    /// Redraw the table on every refresh
    Live { state: Switch },
    Save,
    Reload,
    Config,
    #[command(alias = "quit")]
    Exit,
}

impl Commands {
    /// Commands after which the table is redrawn
    fn changes_table(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. }
                | Commands::Edit { .. }
                | Commands::Toggle { .. }
                | Commands::SelectAll
                | Commands::DeselectAll
                | Commands::Start
                | Commands::Delete { yes: true }
                | Commands::Click { .. }
                | Commands::Reload
        )
    }
}

/// Outcome of one REPL line
#[derive(Debug, PartialEq, Eq)]
pub struct Response {
    pub output: String,
    pub quit: bool,
}

/// Parse and run one REPL line against the context.
pub fn respond(line: &str, ctx: &mut CliContext) -> Result<Response, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "bosswatch".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    let Some(command) = cli.command else {
        return Ok(Response {
            output: String::new(),
            quit: false,
        });
    };

    let status = match &command {
        Commands::List => commands::list(ctx),
        Commands::Add {
            map,
            level,
            interval,
        } => commands::add(ctx, map, level, interval)?,
        Commands::Edit {
            id,
            map,
            level,
            interval,
        } => commands::edit(
            ctx,
            *id,
            map.as_deref(),
            level.as_deref(),
            interval.as_deref(),
        )?,
        Commands::Toggle { id } => commands::toggle(ctx, *id)?,
        Commands::SelectAll => commands::select_all(ctx, true),
        Commands::DeselectAll => commands::select_all(ctx, false),
        Commands::Start => commands::start(ctx),
        Commands::Delete { yes } => commands::delete(ctx, *yes),
        Commands::Click { region, id } => commands::click(ctx, *region, *id)?,
        Commands::Live { state } => commands::set_live_view(ctx, *state == Switch::On),
        Commands::Save => commands::save(ctx)?,
        Commands::Reload => commands::reload(ctx)?,
        Commands::Config => commands::show_settings(ctx),
        Commands::Exit => {
            return Ok(Response {
                output: commands::exit(),
                quit: true,
            });
        }
    };

    let output = if command.changes_table() {
        format!("{}\n\n{}", commands::list(ctx), status)
    } else {
        status
    };
    Ok(Response {
        output,
        quit: false,
    })
}
