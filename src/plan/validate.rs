// src/plan/validate.rs

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::plan::model::PlanFile;

/// Run semantic validation against a loaded plan.
///
/// This checks:
/// - `start_date` (if present) parses as `YYYY-MM-DD`
/// - no task lists itself in `depends_on`
/// - the dependency graph has no cycles
///
/// Unknown `depends_on` ids are *not* an error here: a dangling dependency
/// only blocks its dependent until the list is corrected, so it is surfaced
/// as a warning and kept.
pub fn validate_plan(plan: &PlanFile) -> Result<()> {
    validate_start_date(plan)?;
    validate_dependencies(plan)?;
    validate_dag(plan)?;
    Ok(())
}

/// Parse the plan's start date, if it carries one.
pub fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid start_date '{raw}' (expected YYYY-MM-DD)"))
}

fn validate_start_date(plan: &PlanFile) -> Result<()> {
    if let Some(ref raw) = plan.plan.start_date {
        parse_start_date(raw).context("invalid [plan].start_date")?;
    }
    Ok(())
}

fn validate_dependencies(plan: &PlanFile) -> Result<()> {
    for (id, spec) in plan.task.iter() {
        for dep in spec.depends_on.iter() {
            if dep == id {
                return Err(anyhow!(
                    "task '{}' cannot depend on itself in `depends_on`",
                    id
                ));
            }
            if !plan.task.contains_key(dep) {
                warn!(
                    task = %id,
                    dep = %dep,
                    "unknown dependency in `depends_on`; task will stay blocked until corrected"
                );
            }
        }
    }
    Ok(())
}

fn validate_dag(plan: &PlanFile) -> Result<()> {
    // Edge direction: dep -> task, so for
    //   [task.handbook]
    //   depends_on = ["i9"]
    // we add edge i9 -> handbook.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in plan.task.keys() {
        graph.add_node(id.as_str());
    }

    for (id, spec) in plan.task.iter() {
        for dep in spec.depends_on.iter() {
            if plan.task.contains_key(dep) {
                graph.add_edge(dep.as_str(), id.as_str(), ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(anyhow!(
                "cycle detected in task dependencies involving task '{}'",
                node
            ))
        }
    }
}
