use anyhow::{bail, Context, Result};
use clap::Parser;
use poker_hand::deck::Deck;
use poker_hand::hand::Hand;

/// Compare two five-card poker hands.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Left hand, e.g. "KS 2H 5C JD TD".
    left: Option<String>,
    /// Right hand, e.g. "9C 9H 5C 5H AC".
    right: Option<String>,
    /// Deal both hands from a shuffled deck instead.
    #[arg(long, conflicts_with_all = ["left", "right"])]
    deal: bool,
    /// Seed for a reproducible deal.
    #[arg(long, requires = "deal")]
    seed: Option<u64>,
    /// Log each evaluation step.
    #[arg(long, short)]
    verbose: bool,
}

fn deal(seed: Option<u64>) -> Result<(Hand, Hand)> {
    let mut deck = Deck::standard();
    match seed {
        Some(seed) => deck.shuffle_seeded(seed),
        None => deck.shuffle_with(&mut rand::rng()),
    }
    let left = deck.deal_hand().context("deck ran out of cards")?;
    let right = deck.deal_hand().context("deck ran out of cards")?;
    Ok((left, right))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let (left, right) = if cli.deal {
        deal(cli.seed)?
    } else {
        let (Some(left), Some(right)) = (cli.left.as_deref(), cli.right.as_deref()) else {
            bail!("two hands are required unless --deal is given");
        };
        let left: Hand = left.parse().with_context(|| format!("left hand {left:?}"))?;
        let right: Hand = right.parse().with_context(|| format!("right hand {right:?}"))?;
        (left, right)
    };

    for (side, hand) in [("left", &left), ("right", &right)] {
        let eval = hand.evaluate();
        println!("{side:>5}: {hand}  {} (tiebreak {})", eval.category, eval.tiebreak);
    }
    println!("{}", left.compare_with(&right));
    Ok(())
}
