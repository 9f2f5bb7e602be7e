use crate::algos::{Greedy, contributor_order};
use crate::config::Config;
use crate::loaders::Instance;
use clap::{ArgAction, Parser};
use eyre::{Result, WrapErr, ensure};
use std::path::PathBuf;
use tracing::{Level, debug, error, info, warn};

mod algos;
mod checks;
mod config;
mod display;
mod loaders;
mod model;
mod stats;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Use FILE instead of teamwork.toml
    #[arg(short, long, value_name = "FILE", default_value = "teamwork.toml")]
    config: PathBuf,
    /// Do not write output and log files
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Do not write log files
    #[arg(long)]
    no_logs: bool,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    /// Instance files to solve instead of the content of the inputs directory
    files: Vec<PathBuf>,
}

fn solve(instance: &Instance, config: &Config, args: &Args) -> Result<()> {
    let (mut roster, mut projects) = loaders::load(&instance.path)?;
    info!(
        instance = %instance.name,
        contributors = roster.len(),
        projects = projects.len(),
        "instance loaded"
    );
    if roster.is_empty() {
        warn!(instance = %instance.name, "instance has no contributor");
    }
    model::sort_by_duration(&mut projects);
    let order = contributor_order(&roster, config.solver.tie_break, config.solver.seed);
    let mut greedy = Greedy::new(&mut roster, order);
    let solution = greedy.assign(&mut projects);
    let level_ups = greedy.level_ups();
    checks::ensure_consistent(&roster, &projects, &solution)?;
    let stats = stats::statistics(&projects, &solution, level_ups);
    if solution.is_empty() {
        warn!(instance = %instance.name, "no project could be staffed");
    } else {
        info!(
            instance = %instance.name,
            staffed = stats.accepted,
            skipped = stats.skipped,
            score = stats.score,
            "instance solved"
        );
    }
    if !args.dry_run {
        display::write_output(&config.paths.outputs, &instance.name, &solution)?;
        if !args.no_logs {
            display::write_logs(
                &config.paths.logs,
                &instance.name,
                &roster,
                &projects,
                &solution,
            )?;
        }
    }
    display::display_details(&projects, &solution);
    display::display_stats(&instance.name, &stats);
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        debug!(config = %args.config.display(), "no configuration file, using defaults");
        Config::default()
    };
    let instances = if args.files.is_empty() {
        loaders::discover(&config.paths.inputs)?
    } else {
        args.files
            .iter()
            .map(|p| Instance::from_path(p))
            .collect::<Result<Vec<_>>>()?
    };
    if instances.is_empty() {
        warn!("no instance to solve");
    }
    solve_all(&instances, |instance| solve(instance, &config, &args))
}

/// Solve every instance, even when some of them fail, and report the
/// failures at the end.
fn solve_all<F>(instances: &[Instance], mut solve: F) -> Result<()>
where
    F: FnMut(&Instance) -> Result<()>,
{
    let mut failed = 0;
    for instance in instances {
        let result =
            solve(instance).wrap_err_with(|| format!("cannot solve instance {}", instance.name));
        if let Err(e) = result {
            error!("{e:?}");
            failed += 1;
        }
    }
    ensure!(
        failed == 0,
        "{} instance(s) out of {} could not be solved",
        failed,
        instances.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::bail;
    use std::path::Path;

    fn instances() -> Vec<Instance> {
        ["a_an_example.in.txt", "b_better_start_small.in.txt", "c_collaboration.in.txt"]
            .into_iter()
            .map(|f| Instance::from_path(&Path::new("inputs").join(f)).unwrap())
            .collect()
    }

    #[test]
    fn test_failure_does_not_stop_other_instances() {
        let mut solved = Vec::new();
        let err = solve_all(&instances(), |instance| {
            if instance.name == "b_better_start_small" {
                bail!("project Empty ends on day 5 after its deadline 3");
            }
            solved.push(instance.name.clone());
            Ok(())
        })
        .unwrap_err();
        assert_eq!(solved, vec!["a_an_example", "c_collaboration"]);
        assert_eq!(err.to_string(), "1 instance(s) out of 3 could not be solved");
    }

    #[test]
    fn test_all_solved() {
        let mut count = 0;
        solve_all(&instances(), |_| {
            count += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(count, 3);
    }
}
