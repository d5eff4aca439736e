use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweeper_core::{BoardLayout, GameConfig, RevealPolicy, Session};

mod command;
mod terminal;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Open every neighbor of a zero, stop at numbers
    Standard,
    /// Spread through edge neighbors next to open areas only
    Orthogonal,
    /// Keep spreading across cells showing 0 or 1
    Permissive,
}

impl From<Policy> for RevealPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Standard => RevealPolicy::Standard,
            Policy::Orthogonal => RevealPolicy::Orthogonal,
            Policy::Permissive => RevealPolicy::Permissive,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = GameConfig::CLASSIC.size.0)]
    width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = GameConfig::CLASSIC.size.1)]
    height: u8,

    /// Each cell is a mine with probability 1 / (density + 1), defaults to half the width
    #[arg(short, long)]
    density: Option<u8>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How reveals spread from cells without mined neighbors
    #[arg(long, value_enum, default_value_t = Policy::Standard)]
    policy: Policy,

    /// Cell size in pixels, used by raw `click` commands
    #[arg(long, default_value_t = BoardLayout::DEFAULT_CELL_SIZE)]
    cell_size: u16,

    /// Print every frame as a JSON snapshot instead of a text board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let size = (args.width, args.height);
    let config = match args.density {
        Some(density) => GameConfig::new(size, density),
        None => GameConfig::with_default_density(size),
    }
    .context("Invalid board configuration")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = Session::seeded(config, seed)?
        .with_policy(args.policy.into())
        .with_cell_size(args.cell_size);
    log::info!(
        "{}x{} board, {} mines, {:?} reveals",
        config.size.0,
        config.size.1,
        session.state().mine_count(),
        session.policy()
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut frontend = terminal::Terminal::new(stdin, stdout, *session.layout(), args.json);
    let frames = sweeper_core::run(&mut session, &mut frontend)?;

    log::debug!("Quit after {} frames", frames);
    Ok(())
}
