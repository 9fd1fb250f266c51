use clap::{Parser, Subcommand};
use poker_logic::cards::Rank;
use poker_logic::deck::Deck;
use poker_logic::hand::Hand;
use poker_logic::settings::TableSettings;
use poker_logic::variants::Variant;
use std::cmp::Ordering;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "poker-logic", version, about = "Classify, compare and deal poker hands")]
struct Cli {
    /// Table settings JSON; missing fields use defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Lowest rank in the deck, e.g. 7 for a 32-card deck
    #[arg(long, global = true)]
    floor: Option<Rank>,

    /// standard or telesina
    #[arg(long, global = true)]
    variant: Option<Variant>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the category and tie-break cards of a hand
    Classify {
        /// Cards such as "AS KD TC 9H 9S"
        hand: String,
        #[arg(long)]
        json: bool,
    },
    /// Say which of two hands wins
    Compare { first: String, second: String },
    /// Deal hands from a shuffled deck and pick the winners
    Deal {
        #[arg(long, default_value_t = 4)]
        players: usize,
        #[arg(long, default_value_t = 5)]
        cards: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn settings(cli: &Cli) -> Result<TableSettings, Box<dyn Error>> {
    let mut settings = match &cli.settings {
        Some(path) => TableSettings::load(path)?,
        None => TableSettings::default(),
    };
    if let Some(variant) = cli.variant {
        settings.variant = variant;
        if cli.floor.is_none() && cli.settings.is_none() {
            settings.deck_lowest_rank = variant.default_deck_floor();
        }
    }
    if let Some(floor) = cli.floor {
        settings.deck_lowest_rank = floor;
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = settings(&cli)?;
    let comp = settings.comparator();
    log::debug!("using {settings:?}");

    match cli.command {
        Command::Classify { hand, json } => {
            let hand: Hand = hand.parse()?;
            let strength = comp.evaluate(&hand)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&strength)?);
            } else {
                let used: Vec<String> =
                    strength.cards_used_in_hand().iter().map(|c| c.to_string()).collect();
                println!("{} ({})", strength.category(), used.join(" "));
            }
        }
        Command::Compare { first, second } => {
            let a: Hand = first.parse()?;
            let b: Hand = second.parse()?;
            let verdict = match comp.compare(&a, &b)? {
                Ordering::Greater => "first hand wins",
                Ordering::Less => "second hand wins",
                Ordering::Equal => "split",
            };
            println!("{verdict}");
        }
        Command::Deal { players, cards, seed } => {
            let mut deck = Deck::stripped(settings.deck_lowest_rank);
            if players * cards > deck.len() {
                return Err(format!(
                    "{players} hands of {cards} need {} cards, deck has {}",
                    players * cards,
                    deck.len()
                )
                .into());
            }
            match seed {
                Some(seed) => deck.shuffle_seeded(seed),
                None => deck.shuffle_with(&mut rand::rng()),
            }
            let hands = (0..players)
                .map(|_| Hand::try_new(deck.draw_n(cards)))
                .collect::<Result<Vec<_>, _>>()?;
            let winners = comp.best_hands(&hands)?;
            for (i, hand) in hands.iter().enumerate() {
                let strength = comp.evaluate(hand)?;
                let mark = if winners.contains(&i) { "*" } else { " " };
                println!("{mark} seat {i}: {hand}  {}", strength.category());
            }
        }
    }
    Ok(())
}
