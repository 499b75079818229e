//! Terminal blackjack against the house.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use shoebox::{
    Action, Card, CountAdvice, JsonFileStore, LoadedSession, RoundResult, RoundState,
    SessionState, SessionStore, Table, TableOptions, TableSnapshot, load_or_default,
};

/// Play blackjack against an automated dealer with a persistent bankroll.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Player name; the save file is keyed by it. Prompted for if omitted.
    #[arg(short, long)]
    name: Option<String>,

    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Seed for the shoe; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for save files; defaults to the home directory.
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Log engine events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "shoebox=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = TableOptions::default().with_decks(args.decks);
    let seed = args.seed.unwrap_or_else(rand::random);
    let table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "invalid table configuration");
            eprintln!("Cannot set up the table: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", colorize("=== SHOEBOX BLACKJACK ===", "1;32"));

    let name = match args.name {
        Some(name) => name,
        None => match prompt_line("Enter your name: ") {
            Some(name) if !name.is_empty() => name,
            Some(_) => "Player".to_owned(),
            None => return ExitCode::SUCCESS,
        },
    };

    let dir = args
        .save_dir
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let store = JsonFileStore::for_player(&dir, &name);

    let session = match load_or_default(&store, table.options().starting_balance) {
        LoadedSession::Restored(session) => {
            println!("Welcome back, {name}! Your progress has been loaded.");
            session
        }
        LoadedSession::Fresh(session) => {
            println!("Welcome, {name}! A new profile will be created for you.");
            session
        }
    };

    let mut table = table.with_session(session);
    play(&mut table, &store);

    save(&store, table.session());
    print_stats(table.session());
    println!("\nThanks for playing!");

    ExitCode::SUCCESS
}

/// Runs rounds until the player quits or runs out of money.
fn play(table: &mut Table, store: &JsonFileStore) {
    loop {
        if table.session().is_broke() {
            println!("{}", colorize("You're out of money! Game over.", "31"));
            return;
        }

        if table.check_and_reshuffle() {
            println!("{}", colorize("Shoe reshuffled.", "36"));
        }

        print_shoe(&table.snapshot());
        let balance = table.session().balance();

        let mut round = table.next_round();
        loop {
            let Some(bet) = prompt_bet(balance) else {
                return;
            };
            match round.place_bet(bet) {
                Ok(()) => break,
                Err(err) => println!("{}", colorize(&format!("Bet rejected: {err}"), "31")),
            }
        }

        if let Err(err) = round.deal() {
            error!(error = %err, "initial deal failed, abandoning round");
            println!("Deal failed: {err}");
            continue;
        }

        while round.state() == RoundState::PlayerTurn {
            print_table(&round.snapshot());

            let mut actions = String::from("(H)it, (S)tand");
            if round.can_double() {
                actions.push_str(", (D)ouble Down");
            }
            let Some(input) = prompt_line(&format!("{actions}? ")) else {
                return;
            };

            let action = match input.as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::DoubleDown,
                _ => {
                    println!("Invalid action.");
                    continue;
                }
            };

            if let Err(err) = round.act(action) {
                println!("{}", colorize(&format!("Cannot do that: {err}"), "31"));
            }
        }

        match round.finish() {
            Ok(result) => {
                print_table(&round.snapshot());
                print_result(&result);
            }
            Err(err) => {
                error!(error = %err, "round aborted");
                println!("Round aborted: {err}");
                continue;
            }
        }

        save(store, table.session());

        if prompt_line("Press Enter to continue...").is_none() {
            return;
        }
    }
}

fn save(store: &JsonFileStore, session: &SessionState) {
    if let Err(err) = store.save(session) {
        warn!(error = %err, path = %store.path().display(), "failed to save progress");
        println!("Could not save progress: {err}");
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_bet(balance: usize) -> Option<usize> {
    loop {
        let input = prompt_line(&format!("Bet amount (1-{balance}, q to quit): "))?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn print_shoe(view: &TableSnapshot) {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let left = view.shoe_remaining as f64 / view.shoe_capacity as f64 * 100.0;
    println!(
        "\nShoe: {}/{} cards ({left:.1}% remaining)",
        view.shoe_remaining, view.shoe_capacity
    );

    let advice = match view.advice {
        CountAdvice::PlayerAdvantage => colorize("Player advantage. Bet high!", "32"),
        CountAdvice::DealerAdvantage => colorize("Dealer advantage. Bet low.", "31"),
        CountAdvice::Neutral => colorize("Neutral. Bet normally.", "33"),
    };
    println!(
        "Count: {} (True: {:.2}) | {advice}",
        view.running_count, view.true_count
    );
    println!("Balance: {}", view.balance);
}

fn print_table(view: &TableSnapshot) {
    let mut dealer = format_cards(&view.dealer_cards);
    for _ in 0..view.dealer_hidden {
        dealer.push_str(&colorize(" [??]", "34"));
    }
    println!("\nDealer: {dealer} (value {})", view.dealer_value);
    println!(
        "Player: {} (value {}) | bet {}",
        format_cards(&view.player_cards),
        view.player_value,
        view.bet
    );
    println!("Balance: {}\n", view.balance);
}

fn print_result(result: &RoundResult) {
    let doubled = if result.doubled { " (doubled)" } else { "" };
    let line = if result.net > 0 {
        colorize(
            &format!("WIN! {} - profit {}{doubled}", result.outcome.describe(), result.net),
            "32",
        )
    } else if result.net < 0 {
        colorize(
            &format!("LOSE! {} - lost {}{doubled}", result.outcome.describe(), result.bet),
            "31",
        )
    } else {
        colorize(&format!("PUSH! bet {} returned", result.bet), "33")
    };
    println!("{line}");
    println!("Balance: {}", result.balance);
}

fn print_stats(session: &SessionState) {
    println!("\n{}", colorize("=== Player Stats ===", "36"));
    println!("Balance: {}", session.balance());
    println!("Total Winnings: {}", session.total_winnings());
    println!("Hands Played: {}", session.hands_played());
    println!("Hands Won: {}", session.hands_won());
    println!("Win Rate: {:.1}%", session.win_rate());
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "97" };
    colorize(&card.to_string(), code)
}
