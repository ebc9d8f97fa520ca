use anyhow::{bail, Context, Result};
use std::env;
use std::io;
use std::path::PathBuf;
use virusevolve::config::ConfigManager;
use virusevolve::data::PresetCatalog;
use virusevolve::engines::simulation::{ConsoleProgressCallback, SimulationEngine};
use virusevolve::ui::ConsoleSession;

const CONFIG_FILE: &str = "virusevolve.toml";

struct Args {
    seed: Option<u64>,
    generations: Option<usize>,
    presets: Option<PathBuf>,
    config: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        seed: None,
        generations: None,
        presets: None,
        config: PathBuf::from(CONFIG_FILE),
    };

    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().with_context(|| format!("{} needs a value", flag));
        match flag.as_str() {
            "--seed" => args.seed = Some(value()?.parse().context("--seed must be an integer")?),
            "--generations" => {
                args.generations = Some(value()?.parse().context("--generations must be an integer")?)
            }
            "--presets" => args.presets = Some(PathBuf::from(value()?)),
            "--config" => args.config = PathBuf::from(value()?),
            other => bail!(
                "Unknown argument '{}'. Usage: console [--seed N] [--generations N] [--presets PATH] [--config PATH]",
                other
            ),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let manager = ConfigManager::new();
    manager
        .load_from_file(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    manager.update(|c| {
        if let Some(seed) = args.seed {
            c.simulation.seed = Some(seed);
        }
        if let Some(generations) = args.generations {
            c.simulation.generations = generations;
        }
    })?;
    let config = manager.get();

    let stdin = io::stdin();
    let mut session = ConsoleSession::new(stdin.lock(), io::stdout());

    let mut catalog = PresetCatalog::builtin();
    session.offer_preset_file(&mut catalog, args.presets.as_deref())?;

    let Some(preset) = session.choose_sickness(&catalog)? else {
        bail!("Input ended before a sickness was chosen");
    };
    let overrides = session.ask_overrides(&preset)?;
    let params = preset.resolve(&overrides);

    let mut engine = SimulationEngine::new(config.simulation)?;
    let record = engine
        .simulate(&preset.name, &params, ConsoleProgressCallback)
        .with_context(|| format!("Cannot simulate {}", preset.name))?;

    session.print_record(&record)?;
    Ok(())
}
