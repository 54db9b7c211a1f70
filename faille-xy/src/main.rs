//! Point d'entrée CLI pour faille-xy

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod report;

use cli::InputArgs;

/// Convertir une rupture de faille (azimut, longueur) en coordonnées XY relatives
#[derive(Parser)]
#[command(name = "faille-xy")]
#[command(version)]
#[command(about = "Convertir une rupture de faille (azimut, longueur) en coordonnées XY (km) relatives à un point de référence")]
#[command(
    long_about = "Calcule les coordonnées planes (x, y) en km des deux extrémités d'une rupture \
de faille, relatives à un point de référence.\n\nÉchelles locales sur l'ellipsoïde GRS80, \
projection du point d'arrivée sur une sphère de 6371 km."
)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sortie JSON plutôt que texte
    #[arg(long)]
    json: bool,

    /// Entrées du calcul (drapeaux explicites, --scenario ou --preset)
    #[command(flatten)]
    input: InputArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let scenario = cli.input.resolve()?;
    info!(
        origin_lat = scenario.origin.lat_deg,
        origin_lon = scenario.origin.lon_deg,
        strike = scenario.strike_deg,
        length = scenario.length_km,
        "Calcul des offsets"
    );

    cli::cmd_compute(&scenario, cli.json)?;

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
