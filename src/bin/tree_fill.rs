use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use splice::tree::Tree;

const HELP: &str = "\
    tree_fill - fill a BST with shuffled values, then empty it in another random order

    USAGE:
        tree_fill [--seed SEED] [SIZE]

    OPTIONS:
        --seed SEED         Seed for the random order of inserts and erases. Without it the
                            generator is seeded from the operating system.

    ARGS:
        SIZE                How many values (0..SIZE) to put into the tree. Defaults to 2048.
";

const DEFAULT_SIZE: u32 = 2_048;

#[derive(Debug)]
struct TreeFillArgs {
    seed: Option<u64>,
    size: u32,
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut values: Vec<u32> = (0..args.size).collect();
    values.shuffle(&mut rng);

    let mut tree = Tree::new();
    for value in &values {
        tree.insert(*value);
    }
    assert_eq!(values.len(), tree.len());
    println!(
        "Tree was successfully filled with values from 0 to {} (height {}).",
        args.size,
        tree.height()
    );

    values.shuffle(&mut rng);
    for value in &values {
        tree.erase(value);
    }
    assert!(tree.is_empty());
    println!("Tree was successfully emptied.");
}

fn parse_args() -> Result<TreeFillArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let seed = pargs.opt_value_from_str("--seed")?;

    // A bad size isn't fatal: report it and carry on with the default.
    let size = match pargs.opt_free_from_str::<u32>() {
        Ok(size) => size.unwrap_or(DEFAULT_SIZE),
        Err(e) => {
            eprintln!("Invalid program argument: {}.", e);
            eprintln!("The size of random generated data will be {}.", DEFAULT_SIZE);
            DEFAULT_SIZE
        }
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(TreeFillArgs { seed, size })
}
