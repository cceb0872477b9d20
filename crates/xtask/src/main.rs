use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

/// Internal crates each workspace crate may depend on.
fn allowed_internal_deps() -> BTreeMap<&'static str, &'static [&'static str]> {
    BTreeMap::from([
        ("shelfkeep-domain", &[][..]),
        ("shelfkeep-shared", &["shelfkeep-domain"][..]),
        ("shelfkeep-engine", &["shelfkeep-domain", "shelfkeep-shared"][..]),
    ])
}

/// Engine modules that must only reach storage through the port.
const PORT_ONLY_DIRS: &[&str] = &["src/use_cases", "src/repositories"];

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = check_dependency_direction(&metadata.packages);

    let engine = metadata.workspace_root.join("crates").join("engine");
    let forbidden = Regex::new(r"crate::api\b|infrastructure::(sqlite|memory)\b")
        .context("compiling layering pattern")?;
    for dir in PORT_ONLY_DIRS {
        for file in rust_files(&engine.join(dir))? {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            violations.extend(check_source(&file, &source, &forbidden));
        }
    }

    if violations.is_empty() {
        println!("arch-check: OK");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

fn check_dependency_direction(packages: &[Package]) -> Vec<String> {
    let rules = allowed_internal_deps();
    let mut violations = Vec::new();
    for package in packages {
        let Some(allowed) = rules.get(package.name.as_str()) else {
            continue;
        };
        for dep in &package.dependencies {
            // Dev-dependencies do not ship.
            if dep.kind.as_deref() == Some("dev") {
                continue;
            }
            if rules.contains_key(dep.name.as_str()) && !allowed.contains(&dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }
    violations
}

/// Production code only: scanning stops at the first test module.
fn check_source(path: &Path, source: &str, forbidden: &Regex) -> Vec<String> {
    source
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter_map(|(n, line)| {
            forbidden
                .find(line)
                .map(|m| format!("{}:{} references {}", path.display(), n + 1, m.as_str()))
        })
        .collect()
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
