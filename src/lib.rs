// src/lib.rs

pub mod cli;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod store;
pub mod timeline;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::dag::topological_order;
use crate::engine::{Engine, EngineEvent, EngineOptions};
use crate::plan::{load_and_validate, parse_start_date};
use crate::store::TaskStore;
use crate::timeline::{TimelineTask, layout, timeline_dates, timeline_tasks};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading
/// - the task store (seeded when the plan has no tasks)
/// - dependency ordering + timeline layout for the printed schedule
/// - the automation engine (skipped with --dry-run)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let plan = load_and_validate(&args.plan)?;
    let process_start = resolve_start_date(&args, plan.plan.start_date.as_deref())?;

    let store = TaskStore::new(plan.tasks());

    // A cycle means there is no order to print; refuse up front rather than
    // rendering a partial timeline. Plans loaded from disk were already
    // checked, so this mostly guards caller-supplied task lists.
    let ordered = topological_order(store.tasks()).context("ordering tasks by dependency")?;

    let projected = timeline_tasks(process_start, &ordered);
    print_schedule(process_start, &projected);

    if args.dry_run {
        info!("dry-run complete (no automation)");
        return Ok(());
    }

    let (events_tx, events_rx) = mpsc::channel::<EngineEvent>(64);

    // Ctrl-C → cancel outstanding timers and stop.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(EngineEvent::ShutdownRequested).await;
        });
    }

    let engine = Engine::new(store, EngineOptions::default(), events_rx);
    let final_store = engine.run(events_tx).await?;

    print_outcome(process_start, &final_store);
    Ok(())
}

/// Start date priority: CLI flag, then plan file, then today.
fn resolve_start_date(args: &CliArgs, plan_date: Option<&str>) -> Result<NaiveDate> {
    if let Some(ref raw) = args.start_date {
        return parse_start_date(raw).context("invalid --start-date");
    }
    if let Some(raw) = plan_date {
        return parse_start_date(raw).context("invalid [plan].start_date");
    }
    Ok(Local::now().date_naive())
}

/// Print the dependency-ordered schedule with per-task bar placement.
fn print_schedule(process_start: NaiveDate, projected: &[TimelineTask]) {
    let axis = timeline_dates(process_start, projected);

    println!("taskdag schedule (start {process_start})");
    println!("  axis: {} day(s), {} task(s)", axis.len(), projected.len());
    println!();

    for t in projected {
        let task = &t.task;
        println!(
            "  - [{}] {} ({}, {} priority)",
            t.derived.as_str(),
            task.title,
            task.category.as_str(),
            task.priority.as_str(),
        );
        println!("      due: {} (+{} days)", t.end_date, task.due_in_days);
        if !task.depends_on.is_empty() {
            println!("      depends on: {:?}", task.depends_on);
        }
        if task.automated {
            println!("      automated: true");
        }
        if let Some(bar) = layout(t, &axis) {
            println!(
                "      bar: offset {:.0}%, width {:.0}%, progress {}%",
                bar.offset_fraction * 100.0,
                bar.width_fraction * 100.0,
                t.progress,
            );
        }
    }
    println!();
}

/// Print final statuses after the automation engine has drained.
fn print_outcome(process_start: NaiveDate, store: &TaskStore) {
    let projected = timeline_tasks(process_start, store.tasks());

    println!("final task status:");
    for t in &projected {
        println!("  - {:<12} {}", t.derived.as_str(), t.task.title);
    }
    println!("completion: {}%", store.completion_percentage());
}
