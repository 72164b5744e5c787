// src/dag/order.rs

use std::collections::HashMap;

use tracing::debug;

use crate::errors::OrderError;
use crate::store::Task;

/// Colour of a node during the depth-first visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current recursion stack. Reaching a gray node again means the
    /// dependency relation has a cycle.
    Gray,
    /// Fully visited and already appended to the output.
    Black,
}

/// Order tasks so that every task appears after all of its dependencies.
///
/// Depth-first visit in store order: for each unvisited task, its
/// dependencies are visited first (looked up by id in the same list), then
/// the task itself is appended. Already-visited tasks are skipped, so
/// diamond dependencies cost no duplicate work and every input task appears
/// exactly once in the output.
///
/// A dependency id that cannot be found in the list is skipped here; it is
/// the status derivation that flags it as an unsatisfied dependency.
///
/// Returns [`OrderError::CycleDetected`] naming a task on the cycle when the
/// relation is not acyclic, instead of recursing forever.
pub fn topological_order(tasks: &[Task]) -> Result<Vec<Task>, OrderError> {
    let by_id: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut sorted: Vec<Task> = Vec::with_capacity(tasks.len());

    for task in tasks {
        visit(task, &by_id, &mut marks, &mut sorted)?;
    }

    Ok(sorted)
}

fn visit<'a>(
    task: &'a Task,
    by_id: &HashMap<&str, &'a Task>,
    marks: &mut HashMap<&'a str, Mark>,
    sorted: &mut Vec<Task>,
) -> Result<(), OrderError> {
    match marks.get(task.id.as_str()) {
        Some(Mark::Black) => return Ok(()),
        Some(Mark::Gray) => {
            return Err(OrderError::CycleDetected {
                task_id: task.id.clone(),
            });
        }
        None => {}
    }

    marks.insert(&task.id, Mark::Gray);

    for dep_id in &task.depends_on {
        match by_id.get(dep_id.as_str()).copied() {
            Some(dep) => visit(dep, by_id, marks, sorted)?,
            None => {
                // Dangling reference; not fatal for traversal.
                debug!(task = %task.id, dep = %dep_id, "dependency not found; skipping in traversal");
            }
        }
    }

    marks.insert(&task.id, Mark::Black);
    sorted.push(task.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Task;

    fn task(id: &str, deps: &[&str]) -> Task {
        let mut t = Task::new(id, format!("task {id}"));
        t.depends_on = deps.iter().map(|s| s.to_string()).collect();
        t
    }

    fn position(order: &[Task], id: &str) -> usize {
        order.iter().position(|t| t.id == id).unwrap()
    }

    #[test]
    fn dependencies_come_before_dependents() {
        let tasks = vec![task("a", &["c"]), task("b", &["a"]), task("c", &[])];
        let order = topological_order(&tasks).unwrap();

        assert_eq!(order.len(), 3);
        assert!(position(&order, "c") < position(&order, "a"));
        assert!(position(&order, "a") < position(&order, "b"));
    }

    #[test]
    fn diamond_visits_each_task_once() {
        let tasks = vec![
            task("top", &[]),
            task("left", &["top"]),
            task("right", &["top"]),
            task("bottom", &["left", "right"]),
        ];
        let order = topological_order(&tasks).unwrap();

        assert_eq!(order.len(), 4);
        assert_eq!(position(&order, "top"), 0);
        assert_eq!(position(&order, "bottom"), 3);
    }

    #[test]
    fn ordering_is_idempotent() {
        let tasks = vec![task("a", &["b"]), task("b", &[]), task("c", &["a"])];
        let first = topological_order(&tasks).unwrap();
        let second = topological_order(&tasks).unwrap();
        let first_ids: Vec<_> = first.iter().map(|t| t.id.as_str()).collect();
        let second_ids: Vec<_> = second.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn two_task_cycle_is_detected() {
        let tasks = vec![task("a", &["b"]), task("b", &["a"])];
        let err = topological_order(&tasks).unwrap_err();
        assert!(matches!(err, OrderError::CycleDetected { .. }));
    }

    #[test]
    fn self_cycle_is_detected() {
        let tasks = vec![task("a", &["a"])];
        let err = topological_order(&tasks).unwrap_err();
        assert_eq!(
            err,
            OrderError::CycleDetected {
                task_id: "a".to_string()
            }
        );
    }

    #[test]
    fn dangling_dependency_is_skipped() {
        let tasks = vec![task("a", &["ghost"]), task("b", &["a"])];
        let order = topological_order(&tasks).unwrap();
        assert_eq!(order.len(), 2);
        assert!(position(&order, "a") < position(&order, "b"));
    }
}
