//! Plan command implementation.

use super::output::{JsonPlan, Names, format_dot_graph, format_dot_path, format_text};
use super::{CliError, PlanFormat};
use breedplan::{PlanConfig, Species, plan_with_progress, standard_tests};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    /// Species name (see `breedplan species`)
    #[arg(short, long)]
    species: String,

    /// Target phenotype; every genotype of the result must show it
    #[arg(short, long)]
    target: String,

    /// Seed genotypes or distributions, e.g. rryyWwss or "{1:RRyyWWSs, 1:RRyyWWss}"
    #[arg(required = true)]
    seeds: Vec<String>,

    /// JSON configuration file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Expansion steps (default: 3)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Largest phenotype subset to test for (default: all proper subsets)
    #[arg(long)]
    max_test_size: Option<usize>,

    /// Keep every new distribution on the last step, not only targets
    #[arg(long)]
    no_prune: bool,

    /// Worker threads (default: CPU count)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: PlanFormat,

    /// Show progress bar
    #[arg(short, long)]
    progress: bool,
}

impl PlanArgs {
    /// Load the configuration file, if any, and apply flag overrides.
    fn config(&self) -> Result<PlanConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => PlanConfig::load(path)?,
            None => PlanConfig::default(),
        };
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if self.max_test_size.is_some() {
            config.max_test_size = self.max_test_size;
        }
        if self.no_prune {
            config.prune_final_generation = false;
        }
        if self.workers.is_some() {
            config.expand.workers = self.workers;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Execute the plan command.
///
/// # Errors
///
/// Returns an error if the species, seeds, target or configuration are
/// invalid, or the graph cannot be built.
pub(crate) fn execute(args: &PlanArgs) -> Result<(), CliError> {
    let species = Species::builtin(&args.species)?;
    if !species.phenotypes().iter().any(|p| *p == args.target) {
        return Err(CliError::new(format!(
            "{} have no phenotype {:?} (expected one of: {})",
            species.name(),
            args.target,
            species.phenotypes().join(", ")
        )));
    }
    let config = args.config()?;

    let mut names = Names::new(&species);
    let mut seeds = Vec::with_capacity(args.seeds.len());
    for text in &args.seeds {
        let seed = species.format().parse_distribution(text)?;
        names.label_seed(&seed, text.trim());
        seeds.push(seed);
    }

    let pb = if args.progress {
        let pb = ProgressBar::new(u64::try_from(config.generations).unwrap_or(u64::MAX));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} generations {msg}")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let tests = standard_tests(&species, config.max_test_size);
    let target = args.target.as_str();
    let plan = plan_with_progress(
        tests,
        seeds,
        |d| species.is_uniform(d, target),
        &config,
        |stats| {
            if let Some(pb) = &pb {
                pb.set_message(format!("({} new)", stats.created));
                pb.inc(1);
            }
        },
    )?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    match args.format {
        PlanFormat::Text => print!("{}", format_text(&plan, target, &names)),
        PlanFormat::Dot => match plan.target {
            Some(found) => print!("{}", format_dot_path(&plan.graph, found, &names)),
            None => eprintln!("No uniform {target} reachable."),
        },
        PlanFormat::DotGraph => print!("{}", format_dot_graph(&plan.graph, &names)),
        PlanFormat::Json => {
            let json = JsonPlan::from_plan(&plan, &species, target, &names);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
