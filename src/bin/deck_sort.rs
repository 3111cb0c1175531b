use rand::rngs::StdRng;
use rand::SeedableRng;

use splice::deck::{self, Card, Deck};

const HELP: &str = "\
    deck_sort - shuffle a standard deck and sort it back with a stable selection sort

    USAGE:
        deck_sort [--seed SEED] [COUNT]

    OPTIONS:
        --seed SEED         Seed for the shuffles. Without it the generator is seeded from the
                            operating system.

    ARGS:
        COUNT               Run COUNT shuffle and sort rounds, only reporting rounds that fail.
                            Without it, run one round and print the deck after every step.
";

#[derive(Debug)]
struct DeckSortArgs {
    seed: Option<u64>,
    count: Option<u64>,
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Fatal error: {}.", e);
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.count {
        Some(count) => generic_test(count, &mut rng),
        None => interactive_test(&mut rng),
    }
}

/// Shuffles and sorts the same deck `count` times, reporting any round that isn't sorted
/// stably.
fn generic_test(count: u64, rng: &mut StdRng) {
    let mut deck = Deck::standard();
    assert_eq!(deck.len(), Deck::STANDARD_LEN);

    let mut failures = 0;
    for test_id in 1..=count {
        deck.shuffle(rng);
        let shuffled: Vec<Card> = deck.iter().copied().collect();

        deck.stable_selection_sort();

        if !deck.is_sorted() {
            println!("Test {}:\tDeck was not sorted.", test_id);
            failures += 1;
        } else if !deck::is_stably_sorted(&deck, &shuffled) {
            println!("Test {}:\tDeck was not stably sorted.", test_id);
            failures += 1;
        }
    }
    println!("{} of {} rounds failed.", failures, count);
}

/// Runs a single round printing the deck as it goes.
fn interactive_test(rng: &mut StdRng) {
    println!("Scheme: (rank|suit)");

    let mut deck = Deck::standard();
    assert_eq!(deck.len(), Deck::STANDARD_LEN);
    println!("Input deck:\n{}", deck);

    deck.shuffle(rng);
    println!("Shuffled deck:\n{}", deck);
    let shuffled: Vec<Card> = deck.iter().copied().collect();

    deck.stable_selection_sort();
    println!("Stably sorted deck:\n{}", deck);

    println!("Is deck sorted: {}", deck.is_sorted());
    println!(
        "Is deck stably sorted: {}",
        deck::is_stably_sorted(&deck, &shuffled)
    );
}

fn parse_args() -> Result<DeckSortArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = DeckSortArgs {
        seed: pargs.opt_value_from_str("--seed")?,
        count: pargs.opt_free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}
