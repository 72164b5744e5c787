// src/plan/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::plan::model::PlanFile;
use crate::plan::validate::validate_plan;

/// Load a plan file from a given path and return the raw `PlanFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (cycles, self-dependencies). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PlanFile> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading plan file at {:?}", path))?;

    let plan: PlanFile =
        toml::from_str(&contents).with_context(|| format!("parsing TOML plan from {:?}", path))?;

    Ok(plan)
}

/// Load a plan file from path and run semantic validation.
///
/// This is the entry point the rest of the application uses: it reads TOML,
/// applies serde defaults, and rejects plans whose dependency graph cannot
/// be ordered (self-dependencies, cycles). Dangling dependency ids survive
/// loading with a warning; they block their dependents until corrected.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let plan = load_from_path(&path)?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Default plan path: `Plan.toml` in the current working directory.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Plan.toml")
}
