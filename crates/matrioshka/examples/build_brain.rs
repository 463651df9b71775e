//! Print the shells of a Matrioshka Brain around a chosen star
//!
//! Usage: cargo run -p matrioshka --example build_brain [star_mass_solar] [f_T]
//!
//! Set RUST_LOG=debug to trace luminosity resolution and shell generation.

use matrioshka::display::{summary_cards, ShellTable};
use matrioshka::form::parse_float;
use matrioshka::{compute_shells, InputParameters};
use tracing_subscriber::EnvFilter;
use units::Mass;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let star_mass = args.next().map_or(1.0, |a| parse_float(&a));
    let f_t = args.next().map_or(0.5, |a| parse_float(&a));

    let params = InputParameters {
        star_mass: Mass::from_solar_masses(star_mass),
        f_t,
        f_r: matrioshka::thermo::linked_radius_factor(0.99, f_t),
        show_carnot: true,
        show_exergy: true,
        ..InputParameters::default()
    };

    let brain = match compute_shells(&params) {
        Ok(brain) => brain,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for warning in &brain.warnings {
        eprintln!("warning: {warning}");
    }

    for card in summary_cards(&brain) {
        println!("{:<24} {} {}", card.label, card.value, card.unit);
    }
    println!();

    let table = ShellTable::new(&brain, &params);
    println!("{}", table.headers.join(","));
    for row in &table.rows {
        let mut cells = vec![row.label.as_str(), row.radius_au.as_str(), row.temperature.as_str()];
        cells.extend(
            [&row.carnot, &row.landauer, &row.exergy]
                .into_iter()
                .filter_map(|cell| cell.as_deref()),
        );
        println!("{}", cells.join(","));
    }
}
