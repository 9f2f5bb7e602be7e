use crate::model::{Project, Roster, Solution};
use crate::stats::Statistics;
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("cannot create directory {}", dir.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("cannot write {}", path.display()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("cannot serialize log")
}

/// Staffed projects, in the order they were accepted.
fn accepted<'a>(projects: &'a [Project], solution: &Solution) -> Vec<&'a Project> {
    let by_id = projects.iter().map(|p| (p.id, p)).collect::<HashMap<_, _>>();
    solution
        .entries
        .iter()
        .filter_map(|e| by_id.get(&e.project).copied())
        .collect()
}

pub fn write_output(dir: &Path, instance: &str, solution: &Solution) -> Result<PathBuf> {
    let path = dir.join(format!("{instance}.out.txt"));
    write_file(&path, &solution.to_string())?;
    info!(path = %path.display(), projects = solution.len(), "solution written");
    Ok(path)
}

/// Dump the final state of contributors, staffed projects and the solution
/// for later inspection.
pub fn write_logs(
    dir: &Path,
    instance: &str,
    roster: &Roster,
    projects: &[Project],
    solution: &Solution,
) -> Result<()> {
    write_file(
        &dir.join(format!("{instance}.contributors")),
        &to_json(roster.contributors())?,
    )?;
    write_file(
        &dir.join(format!("{instance}.projects")),
        &to_json(&accepted(projects, solution))?,
    )?;
    write_file(&dir.join(format!("{instance}.result")), &to_json(solution)?)?;
    info!(dir = %dir.display(), "logs written");
    Ok(())
}

pub fn display_details(projects: &[Project], solution: &Solution) {
    for p in accepted(projects, solution) {
        println!("{} (days {} to {}):", p.name, p.start_day, p.end_day());
        for (name, skill) in p.contributors.iter().zip(&p.skills_required) {
            println!("  - {name} ({skill})");
        }
        println!();
    }
}

pub fn display_stats(instance: &str, stats: &Statistics) {
    let total = stats.accepted + stats.skipped;
    println!("{instance}:");
    println!(
        "  Projects staffed/skipped/total: {}/{}/{}",
        stats.accepted, stats.skipped, total
    );
    if total > 0 {
        println!(
            "  Staffed: {:.2}%",
            100.0 * stats.accepted as f32 / total as f32
        );
    }
    println!("  Score: {}", stats.score);
    println!("  Levels gained: {}", stats.level_ups);
}
