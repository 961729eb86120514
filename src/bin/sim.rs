use anyhow::Context;
use battleship_engine::{
    init_logging, DensityTargeting, GuessCell, Grid, Opponent, RandomTargeting, Ship,
    TargetPolicy, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SHIP_SIZES,
};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Policy {
    Random,
    Density,
}

impl Policy {
    fn build(self) -> Box<dyn TargetPolicy> {
        match self {
            Policy::Random => Box::new(RandomTargeting::new()),
            Policy::Density => Box::new(DensityTargeting::new()),
        }
    }
}

/// Play a two-grid Battleship game between two computer players.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SHIP_SIZES.to_vec())]
    ships: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "JSON array of ships for player one, e.g. [{\"top\":0,\"left\":0,\"bottom\":0,\"right\":1}]")]
    fleet: Option<String>,
    #[arg(long, value_enum, default_value_t = Policy::Random)]
    policy: Policy,
}

fn watch(grid: &mut Grid<'_>, shooter: &'static str) {
    grid.add_listener(move |grid, column, row| match grid.get(column, row) {
        Ok(GuessCell::Sunk(index)) => info!("{} sank ship {}", shooter, index),
        Ok(cell) => debug!("{} -> ({}, {}) = {:?}", shooter, column, row, cell),
        Err(_) => {}
    });
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("using seed {}", seed);
    let mut rng1 = SmallRng::seed_from_u64(seed);
    let mut rng2 = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let fleet1 = match &cli.fleet {
        Some(raw) => {
            let ships: Vec<Ship> = serde_json::from_str(raw).context("invalid --fleet")?;
            Opponent::new(cli.columns, cli.rows, ships)?
        }
        None => Opponent::random(cli.columns, cli.rows, &cli.ships, &mut rng1)?,
    };
    let fleet2 = Opponent::random(cli.columns, cli.rows, &cli.ships, &mut rng2)?;

    // each player shoots at the other's fleet
    let mut attack1 = Grid::for_opponent(&fleet2);
    let mut attack2 = Grid::for_opponent(&fleet1);
    watch(&mut attack1, "player1");
    watch(&mut attack2, "player2");

    let mut policy1 = cli.policy.build();
    let mut policy2 = cli.policy.build();

    let mut turns = 0usize;
    let winner = loop {
        turns += 1;
        let (c, r) = policy1
            .select_target(&mut rng1, &attack1)
            .context("player1 ran out of targets")?;
        attack1.shoot_at(c, r)?;
        if attack1.is_finished() {
            break "player1";
        }
        let (c, r) = policy2
            .select_target(&mut rng2, &attack2)
            .context("player2 ran out of targets")?;
        attack2.shoot_at(c, r)?;
        if attack2.is_finished() {
            break "player2";
        }
    };
    info!("{} wins after {} turns", winner, turns);

    let result = json!({
        "seed": seed,
        "winner": winner,
        "turns": turns,
        "player1": {
            "shots": attack1.shots_fired(),
            "ships_sunk": attack1.ships_sunk().iter().filter(|s| **s).count(),
            "fleet": fleet1.ships(),
        },
        "player2": {
            "shots": attack2.shots_fired(),
            "ships_sunk": attack2.ships_sunk().iter().filter(|s| **s).count(),
            "fleet": fleet2.ships(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
