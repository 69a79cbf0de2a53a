//! poker-hand: five-card draw hand evaluation
//!
//! Goals:
//! - Deterministic, pure classification of a five-card hand into one of ten categories
//! - Head-to-head comparison that always picks a side (`Win` or `Loss`)
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_hand::evaluator::{Category, Outcome};
//! use poker_hand::hand::Hand;
//!
//! let left: Hand = "9H 9S 8D 8C TH".parse().unwrap();
//! let right: Hand = "9C 9H 5C 5H AC".parse().unwrap();
//!
//! assert_eq!(left.evaluate().category, Category::TwoPair);
//! assert_eq!(left.compare_with(&right), Outcome::Win);
//! ```
//!
//! ## CLI
//! Compare two hands from the command line with:
//! ```sh
//! cargo run --bin poker-hand -- "KS 2H 5C JD TD" "9C 9H 5C 5H AC"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
