use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nicedice::dist::Distribution;
use nicedice::order::Extremum;
use nicedice::outcome::Outcome;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Distribution of a sum of dice, e.g. `sum 2d6 d8 3`.
    Sum {
        /// Terms: `dN`, `KdN`, or an integer constant.
        #[arg(value_name = "TERM", required = true, value_parser = parse_term)]
        terms: Vec<Term>,

        /// Condition on the total being at least this value.
        #[arg(long, value_name = "INT")]
        at_least: Option<i64>,
    },

    /// Best and worst of several rolls of one die.
    Advantage {
        /// Number of sides.
        #[arg(long, value_name = "INT", default_value = "20")]
        sides: u32,

        /// Number of draws.
        #[arg(long, value_name = "INT", default_value = "2")]
        draws: usize,
    },

    /// Roll dice at random.
    Roll {
        /// Term to roll: `dN`, `KdN`, or an integer constant.
        #[arg(value_name = "TERM", value_parser = parse_term)]
        term: Term,

        /// Number of rolls.
        #[arg(short, value_name = "INT", default_value = "1")]
        n: usize,

        /// Random seed.
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone)]
enum Term {
    Dice { count: usize, sides: u32 },
    Constant(i64),
}

fn parse_term(s: &str) -> Result<Term, String> {
    let s = s.trim().to_lowercase();
    if let Some((count, sides)) = s.split_once('d') {
        let count = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|e| format!("bad dice count in '{}': {}", s, e))?
        };
        let sides = sides.parse().map_err(|e| format!("bad number of sides in '{}': {}", s, e))?;
        Ok(Term::Dice { count, sides })
    } else {
        s.parse().map(Term::Constant).map_err(|e| format!("bad term '{}': {}", s, e))
    }
}

impl Term {
    fn to_distribution(&self) -> Result<Distribution, nicedice::DiceError> {
        match *self {
            Term::Constant(k) => Ok(Distribution::point_mass(k)),
            Term::Dice { count, sides } => {
                let die = Distribution::from_sides(sides)?;
                let mut total = Distribution::point_mass(0);
                for _ in 0..count {
                    total = &total + &die;
                }
                Ok(total)
            }
        }
    }
}

/// Renders a horizontal bar chart of the distribution.
fn print_chart(title: &str, dist: &Distribution) {
    const WIDTH: f64 = 50.0;
    println!("{}:", title);
    let peak = dist.iter().map(|(_, p)| p).fold(0.0, f64::max);
    for (outcome, p) in dist.iter() {
        let bar = "#".repeat((p / peak * WIDTH).round() as usize);
        println!("{:>6} | {:<50} {:.4}", outcome.to_string(), bar, p);
    }
    println!(
        "mean = {:.4}, variance = {:.4}, std dev = {:.4}",
        dist.expectation(),
        dist.variance(),
        dist.std_dev()
    );
    println!();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::debug!("args = {:?}", args);

    match args.command {
        Command::Sum { terms, at_least } => {
            let mut total = Distribution::point_mass(0);
            for term in &terms {
                total = &total + &term.to_distribution()?;
            }
            print_chart("Sum", &total);

            if let Some(k) = at_least {
                let k = Outcome::from(k);
                let hit = total.greater_or_equal(&k).probability_of_true()?;
                println!("P(sum >= {}) = {:.4}", k, hit);
                let given = total.filter_support(|x| *x >= k)?;
                print_chart(&format!("Sum given sum >= {}", k), &given);
            }
        }

        Command::Advantage { sides, draws } => {
            let die = Distribution::from_sides(sides)?;
            let best = die.repeat_extreme(draws, Extremum::Max)?;
            let worst = die.repeat_extreme(draws, Extremum::Min)?;
            print_chart(&format!("d{}", sides), &die);
            print_chart(&format!("Best of {} d{}", draws, sides), &best);
            print_chart(&format!("Worst of {} d{}", draws, sides), &worst);

            let wins = best.greater_than(&worst).probability_of_true()?;
            println!("P(best > worst) = {:.4}", wins);
        }

        Command::Roll { term, n, seed } => {
            let dist = term.to_distribution()?;
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let rolls = dist.roll(n, &mut rng)?;
            let shown: Vec<String> = rolls.iter().map(|x| x.to_string()).collect();
            println!("{}", shown.join(" "));
        }
    }

    Ok(())
}
