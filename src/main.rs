//! Drawcheck storefront CLI: buy lines, browse published results, and
//! check pending tickets, standing in for the original dashboard UI.

use clap::{Parser, Subcommand};
use drawcheck::config::ConfigLoader;
use drawcheck::games::types::format_amount;
use drawcheck::results::{FixtureResultSource, ResultSource};
use drawcheck::store::TicketStore;
use drawcheck::{DrawcheckResult, GameKind, NumberPick, Ticket, TicketChecker, TicketStatus};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drawcheck", about = "Lottery storefront: buy lines and check them against published draws")]
struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Player identity, overriding the configured default
    #[arg(long, global = true)]
    player: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Buy a line with chosen numbers
    Buy {
        /// Game: lotto, afromillions, thunderball or setforlife
        game: GameKind,
        /// Main numbers, comma separated
        #[arg(long, value_delimiter = ',')]
        main: Vec<u8>,
        /// Bonus numbers, comma separated
        #[arg(long, value_delimiter = ',')]
        bonus: Vec<u8>,
        /// Stake in minor currency units; defaults to the game minimum
        #[arg(long)]
        stake: Option<u64>,
    },
    /// Buy a randomly picked line
    LuckyDip {
        game: GameKind,
        #[arg(long)]
        stake: Option<u64>,
    },
    /// List the player's tickets
    List,
    /// Show the published draw results
    Results,
    /// Check pending tickets against the published draws
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> DrawcheckResult<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_path(path);
    }
    let config = loader.load()?;

    let player = cli.player.unwrap_or(config.player.default_player);

    let data_dir = PathBuf::from(&config.storage.data_dir);
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        drawcheck::errors::StorageError::WriteFailed(format!(
            "Failed to create {}: {}",
            data_dir.display(),
            e
        ))
    })?;
    let mut store = TicketStore::open(data_dir.join("tickets.json"))?;

    match cli.command {
        Command::Buy {
            game,
            main,
            bonus,
            stake,
        } => {
            let stake = stake.unwrap_or_else(|| game.min_stake());
            let ticket = Ticket::new(&player, game, NumberPick::new(main, bonus), stake)?;
            print_line(&ticket);
            store.add(ticket)?;
        }
        Command::LuckyDip { game, stake } => {
            let stake = stake.unwrap_or_else(|| game.min_stake());
            let ticket = Ticket::lucky_dip(&player, game, stake, &mut rand::thread_rng())?;
            print_line(&ticket);
            store.add(ticket)?;
        }
        Command::List => {
            let tickets = store.all_for_player(&player);
            if tickets.is_empty() {
                println!("No tickets for {}", player);
            }
            for ticket in tickets {
                print_ticket(ticket);
            }
        }
        Command::Results => {
            let source = FixtureResultSource::published();
            for game in GameKind::all() {
                for result in source.results_for(game) {
                    println!(
                        "{:<14} {}  main {:?}  {} {:?}",
                        game.to_string(),
                        result.draw_date.format("%Y-%m-%d"),
                        result.numbers.main,
                        game.bonus_name(),
                        result.numbers.bonus,
                    );
                }
            }
        }
        Command::Check => {
            let checker = TicketChecker::new(FixtureResultSource::published());
            let report = checker.check_player(&mut store, &player)?;
            println!(
                "Checked {} ticket(s): {} won, {} lost, {} awaiting a draw",
                report.checked, report.won, report.lost, report.awaiting_result
            );
            if report.total_winnings > 0 {
                println!("Winnings this run: {}", format_amount(report.total_winnings));
            }
        }
    }

    Ok(())
}

fn print_line(ticket: &Ticket) {
    println!(
        "{} line for {}: main {:?}, {} {:?}, stake {}",
        ticket.game,
        ticket.player_id,
        ticket.numbers.main,
        ticket.game.bonus_name(),
        ticket.numbers.bonus,
        format_amount(ticket.stake),
    );
}

fn print_ticket(ticket: &Ticket) {
    let outcome = match ticket.status {
        TicketStatus::Won => format!(
            "won {} ({})",
            format_amount(ticket.win_amount.unwrap_or(0)),
            ticket.tier.as_deref().unwrap_or("unknown tier"),
        ),
        other => other.to_string(),
    };
    println!(
        "{}  {:<14} main {:?} bonus {:?}  stake {}  {}",
        ticket.id,
        ticket.game.to_string(),
        ticket.numbers.main,
        ticket.numbers.bonus,
        format_amount(ticket.stake),
        outcome,
    );
}
