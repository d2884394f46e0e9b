//! seir-runner: headless CA-SEIR scenario runner.
//!
//! Usage:
//!   seir-runner
//!   seir-runner --config data/scenarios.json --seed 12345 --out-dir out
//!
//! With no arguments it performs the reference run: 100x100 grid,
//! 250 steps, three transmission-rate scenarios, artifacts under
//! `resultados/`.
//!
//! The flags are optional overrides on top of that fixed run; the
//! reference behaviour takes no arguments.

mod render;

use anyhow::{Context, Result};
use ca_seir_core::{config::SimConfig, engine::SimEngine, results::SimResults};
use render::ArtifactWriter;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match find_arg(&args, "--config") {
        Some(path) => SimConfig::load(path).with_context(|| format!("Cannot load config {path}"))?,
        None => SimConfig::default(),
    };
    config.master_seed = parse_arg(&args, "--seed", config.master_seed);
    if let Some(dir) = find_arg(&args, "--out-dir") {
        config.output_dir = dir.to_string();
    }

    println!("CA-SEIR — seir-runner");
    println!("  seed:      {}", config.master_seed);
    println!("  grid:      {0}x{0}", config.grid_size);
    println!("  steps:     {}", config.steps);
    println!("  sigma:     {}", config.sigma);
    println!("  gamma:     {}", config.gamma);
    println!("  out_dir:   {}", config.output_dir);
    println!();

    let engine = SimEngine::new(config)?;
    let mut writer = ArtifactWriter::create(&engine.config.output_dir)?;

    let results = engine.run(&mut writer)?;

    log::info!("rendering SEIR charts");
    writer.write_seir_charts(&results)?;
    log::info!("rendering comparative infected chart");
    writer.write_comparative(&results)?;
    writer.write_results_json(&results)?;

    print_summary(&results, &writer);
    Ok(())
}

fn print_summary(results: &SimResults, writer: &ArtifactWriter) {
    println!("=== RUN SUMMARY ===");
    for r in results.iter() {
        let (peak_step, peak) = r.peak_infected();
        println!("  {} (beta = {})", r.name, r.beta);
        println!("    peak infected:  {peak} at step {peak_step}");
        if let Some(c) = r.final_counts() {
            println!(
                "    final S/E/I/R:  {}/{}/{}/{}",
                c.susceptible, c.exposed, c.infected, c.recovered
            );
        }
        println!("    attack rate:    {:.1}%", r.attack_rate() * 100.0);
    }
    println!();
    println!(
        "  {} artifacts written to {}",
        writer.written().len(),
        writer.out_dir().display()
    );
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
