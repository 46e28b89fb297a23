//! Pure operations over a single user's roadmap document.
//!
//! Every mutating endpoint is a read-modify-write over one `UserRoadmapDoc`:
//! handlers load the document, apply exactly one of these operations, and
//! persist the whole document back (`store::save`, which recomputes `stats`).
//! The operations either fully succeed or return an error with the document
//! untouched — there is no partial apply.

use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::roadmap::models::{
    default_track, AddRoadmapRequest, NewTaskRequest, Preferences, PreferencesPatch, RoadmapEntry,
    RoadmapStats, TaskMutation, TaskStatus, UserTask,
};

/// One user's roadmap: owned task copies, bulk-import summaries, preferences,
/// and derived counters.
#[derive(Debug, Clone, Default)]
pub struct UserRoadmapDoc {
    pub tasks: Vec<UserTask>,
    pub roadmaps: Vec<RoadmapEntry>,
    pub preferences: Preferences,
    pub stats: RoadmapStats,
}

/// Counts reported back from a bulk roadmap import.
#[derive(Debug, Clone, Copy)]
pub struct ImportOutcome {
    pub added: usize,
    pub skipped: usize,
}

impl UserRoadmapDoc {
    fn next_order(&self) -> i32 {
        self.tasks.iter().map(|t| t.order).max().unwrap_or(0) + 1
    }

    fn find_task_mut(&mut self, task_id: &str) -> Result<&mut UserTask, AppError> {
        self.tasks
            .iter_mut()
            .find(|t| t.task_id == task_id)
            .ok_or_else(|| AppError::NotFound(format!("Task '{task_id}' not found")))
    }

    /// Recomputes `stats` from the current `tasks` array. Called
    /// unconditionally by the save path so the counters can never drift.
    pub fn refresh_stats(&mut self) {
        self.stats = RoadmapStats {
            total_tasks: self.tasks.len(),
            completed_tasks: self
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            in_progress_tasks: self
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
        };
    }

    /// Adds a single task. Fails on an exact `taskId` duplicate; the new task
    /// goes to the end of the ordering (`max(order) + 1`).
    pub fn add_task(&mut self, req: NewTaskRequest, now: DateTime<Utc>) -> Result<(), AppError> {
        let task_id = req.task_id.trim().to_string();
        if task_id.is_empty() {
            return Err(AppError::Validation("taskId is required".to_string()));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        if self.tasks.iter().any(|t| t.task_id == task_id) {
            return Err(AppError::Conflict(format!(
                "Task '{task_id}' already exists in your roadmap"
            )));
        }

        let order = self.next_order();
        self.tasks.push(UserTask {
            task_id,
            name: req.name,
            description: req.description,
            status: req.status,
            is_custom: req.is_custom,
            static_task_id: req.static_task_id,
            roadmap_track: req.roadmap_track.unwrap_or_else(default_track),
            roadmap_id: None,
            estimated_time: req.estimated_time,
            difficulty: req.difficulty,
            category: req.category,
            resources: req.resources,
            notes: req.notes,
            order,
            added_at: now,
            // A task created straight into completed still records when.
            completed_at: (req.status == TaskStatus::Completed).then_some(now),
            updated_at: now,
        });
        Ok(())
    }

    /// Imports a whole static roadmap. Task ids are synthesized as
    /// `<roadmapId>_<id | taskId | index>`; ids already present are silently
    /// skipped, and the call fails only when every task was a duplicate.
    ///
    /// One `roadmaps[]` summary entry is kept per roadmap id: a re-import
    /// that brings new tasks refreshes the existing entry's count instead of
    /// appending a second one.
    pub fn add_roadmap(
        &mut self,
        req: AddRoadmapRequest,
        now: DateTime<Utc>,
    ) -> Result<ImportOutcome, AppError> {
        let roadmap_id = req.roadmap_id.trim().to_string();
        if roadmap_id.is_empty() {
            return Err(AppError::Validation("roadmapId is required".to_string()));
        }
        if req.roadmap_name.trim().is_empty() {
            return Err(AppError::Validation("roadmapName is required".to_string()));
        }
        if req.tasks.is_empty() {
            return Err(AppError::Validation(
                "tasks must be a non-empty array".to_string(),
            ));
        }

        let track = req.roadmap_track.unwrap_or_else(default_track);
        let mut order = self.next_order();
        let mut added = 0usize;
        let mut skipped = 0usize;
        let mut incoming: Vec<UserTask> = Vec::with_capacity(req.tasks.len());

        for (index, task) in req.tasks.into_iter().enumerate() {
            let source_id = task
                .id
                .or(task.task_id)
                .unwrap_or_else(|| index.to_string());
            let task_id = format!("{roadmap_id}_{source_id}");

            let exists = self.tasks.iter().any(|t| t.task_id == task_id)
                || incoming.iter().any(|t| t.task_id == task_id);
            if exists {
                skipped += 1;
                continue;
            }

            incoming.push(UserTask {
                task_id,
                name: task.name,
                description: task.description,
                status: TaskStatus::NotStarted,
                is_custom: false,
                static_task_id: Some(source_id),
                roadmap_track: track.clone(),
                roadmap_id: Some(roadmap_id.clone()),
                estimated_time: task.estimated_time,
                difficulty: task.difficulty,
                category: task.category,
                resources: task.resources,
                notes: String::new(),
                order,
                added_at: now,
                completed_at: None,
                updated_at: now,
            });
            order += 1;
            added += 1;
        }

        if added == 0 {
            return Err(AppError::Conflict(format!(
                "All tasks from roadmap '{roadmap_id}' already exist in your roadmap"
            )));
        }

        self.tasks.append(&mut incoming);

        match self
            .roadmaps
            .iter_mut()
            .find(|r| r.roadmap_id == roadmap_id)
        {
            Some(entry) => entry.task_count += added,
            None => self.roadmaps.push(RoadmapEntry {
                roadmap_id,
                name: req.roadmap_name,
                track,
                task_count: added,
                date_added: now,
            }),
        }

        Ok(ImportOutcome { added, skipped })
    }

    /// Applies one multiplexed task mutation. Unknown task ids fail with the
    /// document untouched; unknown actions never reach this far (they fail
    /// serde deserialization at the route boundary).
    pub fn apply_mutation(
        &mut self,
        mutation: TaskMutation,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        match mutation {
            TaskMutation::UpdateStatus { task_id, updates } => {
                let task = self.find_task_mut(&task_id)?;
                // completedAt marks the first entry into completed and is
                // deliberately kept when the status later regresses.
                if updates.status == TaskStatus::Completed && task.status != TaskStatus::Completed {
                    task.completed_at = Some(now);
                }
                task.status = updates.status;
                task.updated_at = now;
            }
            TaskMutation::UpdateNotes { task_id, updates } => {
                let task = self.find_task_mut(&task_id)?;
                task.notes = updates.notes;
                task.updated_at = now;
            }
            TaskMutation::Reorder { task_id, new_order } => {
                let task = self.find_task_mut(&task_id)?;
                task.order = new_order;
                task.updated_at = now;
                // Stable sort: tasks sharing an order value keep their
                // relative pre-sort positions.
                self.tasks.sort_by_key(|t| t.order);
            }
            TaskMutation::Remove { task_id } => {
                let index = self
                    .tasks
                    .iter()
                    .position(|t| t.task_id == task_id)
                    .ok_or_else(|| AppError::NotFound(format!("Task '{task_id}' not found")))?;
                self.tasks.remove(index);
            }
            TaskMutation::UpdateDetails { task_id, updates } => {
                let task = self.find_task_mut(&task_id)?;
                if !task.is_custom {
                    return Err(AppError::Validation(format!(
                        "Task '{task_id}' is not a custom task; only status, notes, and order can change"
                    )));
                }
                if let Some(name) = updates.name {
                    if name.trim().is_empty() {
                        return Err(AppError::Validation("name cannot be empty".to_string()));
                    }
                    task.name = name;
                }
                if let Some(description) = updates.description {
                    task.description = description;
                }
                if let Some(estimated_time) = updates.estimated_time {
                    task.estimated_time = Some(estimated_time);
                }
                if let Some(difficulty) = updates.difficulty {
                    task.difficulty = difficulty;
                }
                if let Some(category) = updates.category {
                    task.category = Some(category);
                }
                if let Some(resources) = updates.resources {
                    task.resources = resources;
                }
                task.updated_at = now;
            }
        }
        Ok(())
    }

    /// Removes a bulk-imported roadmap and cascades to every task carrying
    /// its id. Returns how many tasks were removed.
    pub fn remove_roadmap(&mut self, roadmap_id: &str) -> Result<usize, AppError> {
        let index = self
            .roadmaps
            .iter()
            .position(|r| r.roadmap_id == roadmap_id)
            .ok_or_else(|| AppError::NotFound(format!("Roadmap '{roadmap_id}' not found")))?;
        self.roadmaps.remove(index);

        let before = self.tasks.len();
        self.tasks
            .retain(|t| t.roadmap_id.as_deref() != Some(roadmap_id));
        Ok(before - self.tasks.len())
    }

    /// Merges an allow-listed preference patch. Unknown keys were already
    /// dropped by serde; if nothing recognized remains, the call fails.
    pub fn apply_preferences(&mut self, patch: PreferencesPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "No recognized preference keys in update".to_string(),
            ));
        }
        if let Some(default_track) = patch.default_track {
            self.preferences.default_track = default_track;
        }
        if let Some(show_completed) = patch.show_completed {
            self.preferences.show_completed = show_completed;
        }
        if let Some(sort_by) = patch.sort_by {
            self.preferences.sort_by = sort_by;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::models::{ImportTask, SortBy, StatusUpdate, TaskDetailsUpdate};

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn new_task(task_id: &str, name: &str) -> NewTaskRequest {
        NewTaskRequest {
            task_id: task_id.to_string(),
            name: name.to_string(),
            description: String::new(),
            status: TaskStatus::NotStarted,
            is_custom: false,
            static_task_id: None,
            roadmap_track: None,
            estimated_time: None,
            difficulty: Default::default(),
            category: None,
            resources: vec![],
            notes: String::new(),
        }
    }

    fn import_task(id: &str, name: &str) -> ImportTask {
        ImportTask {
            id: Some(id.to_string()),
            task_id: None,
            name: name.to_string(),
            description: String::new(),
            estimated_time: None,
            difficulty: Default::default(),
            category: None,
            resources: vec![],
        }
    }

    fn import_request(roadmap_id: &str, name: &str, tasks: Vec<ImportTask>) -> AddRoadmapRequest {
        AddRoadmapRequest {
            roadmap_id: roadmap_id.to_string(),
            roadmap_name: name.to_string(),
            roadmap_track: Some("Frontend".to_string()),
            tasks,
        }
    }

    fn assert_stats_consistent(doc: &mut UserRoadmapDoc) {
        doc.refresh_stats();
        assert_eq!(doc.stats.total_tasks, doc.tasks.len());
        assert_eq!(
            doc.stats.completed_tasks,
            doc.tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count()
        );
        assert_eq!(
            doc.stats.in_progress_tasks,
            doc.tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count()
        );
    }

    #[test]
    fn test_add_task_defaults() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "Learn X"), now()).unwrap();

        let task = &doc.tasks[0];
        assert_eq!(task.order, 1);
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert_eq!(task.roadmap_track, "General");
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_add_task_order_continues_from_max() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        doc.add_task(new_task("t2", "B"), now()).unwrap();
        assert_eq!(doc.tasks[1].order, 2);
    }

    #[test]
    fn test_add_task_already_completed_stamps_completed_at() {
        let mut doc = UserRoadmapDoc::default();
        let mut req = new_task("t1", "Done on arrival");
        req.status = TaskStatus::Completed;
        let at = now();
        doc.add_task(req, at).unwrap();

        assert_eq!(doc.tasks[0].completed_at, Some(at));
        assert_stats_consistent(&mut doc);
        assert_eq!(doc.stats.completed_tasks, 1);
    }

    #[test]
    fn test_add_task_duplicate_fails_unchanged() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        let snapshot: Vec<String> = doc.tasks.iter().map(|t| t.task_id.clone()).collect();

        let err = doc.add_task(new_task("t1", "Other"), now()).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(doc.tasks.len(), 1);
        let after: Vec<String> = doc.tasks.iter().map(|t| t.task_id.clone()).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_add_task_missing_name_fails() {
        let mut doc = UserRoadmapDoc::default();
        let err = doc.add_task(new_task("t1", "  "), now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(doc.tasks.is_empty());
    }

    #[test]
    fn test_add_roadmap_synthesizes_ids() {
        let mut doc = UserRoadmapDoc::default();
        let outcome = doc
            .add_roadmap(
                import_request(
                    "fe",
                    "Frontend",
                    vec![import_task("a", "A"), import_task("b", "B")],
                ),
                now(),
            )
            .unwrap();

        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(doc.tasks[0].task_id, "fe_a");
        assert_eq!(doc.tasks[1].task_id, "fe_b");
        assert_eq!(doc.tasks[0].roadmap_id.as_deref(), Some("fe"));
        assert_eq!(doc.roadmaps.len(), 1);
        assert_eq!(doc.roadmaps[0].task_count, 2);
    }

    #[test]
    fn test_add_roadmap_index_fallback_id() {
        let mut doc = UserRoadmapDoc::default();
        let mut anonymous = import_task("x", "A");
        anonymous.id = None;
        doc.add_roadmap(import_request("fe", "Frontend", vec![anonymous]), now())
            .unwrap();
        assert_eq!(doc.tasks[0].task_id, "fe_0");
    }

    #[test]
    fn test_add_roadmap_skips_duplicates_keeps_rest() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_roadmap(import_request("fe", "Frontend", vec![import_task("a", "A")]), now())
            .unwrap();

        let outcome = doc
            .add_roadmap(
                import_request(
                    "fe",
                    "Frontend",
                    vec![import_task("a", "A"), import_task("b", "B")],
                ),
                now(),
            )
            .unwrap();

        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(doc.tasks.len(), 2);
        // One summary entry per roadmap id, refreshed in place.
        assert_eq!(doc.roadmaps.len(), 1);
        assert_eq!(doc.roadmaps[0].task_count, 2);
    }

    #[test]
    fn test_add_roadmap_all_duplicates_fails_without_entry() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_roadmap(import_request("fe", "Frontend", vec![import_task("a", "A")]), now())
            .unwrap();

        let err = doc
            .add_roadmap(
                import_request("fe", "Frontend", vec![import_task("a", "A")]),
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(doc.tasks.len(), 1);
        assert_eq!(doc.roadmaps.len(), 1);
        assert_eq!(doc.roadmaps[0].task_count, 1);
    }

    #[test]
    fn test_add_roadmap_empty_tasks_fails() {
        let mut doc = UserRoadmapDoc::default();
        let err = doc
            .add_roadmap(import_request("fe", "Frontend", vec![]), now())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_add_roadmap_orders_continue_from_existing() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("solo", "Solo"), now()).unwrap();
        doc.add_roadmap(
            import_request(
                "fe",
                "Frontend",
                vec![import_task("a", "A"), import_task("b", "B")],
            ),
            now(),
        )
        .unwrap();

        let orders: Vec<i32> = doc.tasks.iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_status_sets_completed_at_once() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();

        doc.apply_mutation(
            TaskMutation::UpdateStatus {
                task_id: "t1".to_string(),
                updates: StatusUpdate {
                    status: TaskStatus::Completed,
                },
            },
            now(),
        )
        .unwrap();
        let completed_at = doc.tasks[0].completed_at;
        assert!(completed_at.is_some());

        // Regression keeps the original completion timestamp.
        doc.apply_mutation(
            TaskMutation::UpdateStatus {
                task_id: "t1".to_string(),
                updates: StatusUpdate {
                    status: TaskStatus::InProgress,
                },
            },
            now(),
        )
        .unwrap();
        assert_eq!(doc.tasks[0].status, TaskStatus::InProgress);
        assert_eq!(doc.tasks[0].completed_at, completed_at);

        // Re-completing stamps a fresh timestamp.
        doc.apply_mutation(
            TaskMutation::UpdateStatus {
                task_id: "t1".to_string(),
                updates: StatusUpdate {
                    status: TaskStatus::Completed,
                },
            },
            Utc::now(),
        )
        .unwrap();
        assert!(doc.tasks[0].completed_at.is_some());
    }

    #[test]
    fn test_update_notes() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        doc.apply_mutation(
            TaskMutation::UpdateNotes {
                task_id: "t1".to_string(),
                updates: crate::roadmap::models::NotesUpdate {
                    notes: "remember flexbox".to_string(),
                },
            },
            now(),
        )
        .unwrap();
        assert_eq!(doc.tasks[0].notes, "remember flexbox");
    }

    #[test]
    fn test_reorder_sorts_ascending() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        doc.add_task(new_task("t2", "B"), now()).unwrap();
        doc.add_task(new_task("t3", "C"), now()).unwrap();

        doc.apply_mutation(
            TaskMutation::Reorder {
                task_id: "t3".to_string(),
                new_order: 0,
            },
            now(),
        )
        .unwrap();

        let ids: Vec<&str> = doc.tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t1", "t2"]);
        let mut orders: Vec<i32> = doc.tasks.iter().map(|t| t.order).collect();
        let sorted = orders.clone();
        orders.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_reorder_tie_is_stable() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        doc.add_task(new_task("t2", "B"), now()).unwrap();

        // t2 takes order 1 as well; t1 was first before the sort and stays first.
        doc.apply_mutation(
            TaskMutation::Reorder {
                task_id: "t2".to_string(),
                new_order: 1,
            },
            now(),
        )
        .unwrap();
        let ids: Vec<&str> = doc.tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_remove_task() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        doc.apply_mutation(
            TaskMutation::Remove {
                task_id: "t1".to_string(),
            },
            now(),
        )
        .unwrap();
        assert!(doc.tasks.is_empty());
        assert_stats_consistent(&mut doc);
        assert_eq!(doc.stats, RoadmapStats::default());
    }

    #[test]
    fn test_mutation_unknown_task_fails_without_change() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();
        let err = doc
            .apply_mutation(
                TaskMutation::Remove {
                    task_id: "ghost".to_string(),
                },
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(doc.tasks.len(), 1);
    }

    #[test]
    fn test_update_details_rejected_for_static_task() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "A"), now()).unwrap();

        let err = doc
            .apply_mutation(
                TaskMutation::UpdateDetails {
                    task_id: "t1".to_string(),
                    updates: TaskDetailsUpdate {
                        name: Some("Renamed".to_string()),
                        ..Default::default()
                    },
                },
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(doc.tasks[0].name, "A");
    }

    #[test]
    fn test_update_details_allowed_for_custom_task() {
        let mut doc = UserRoadmapDoc::default();
        let mut req = new_task("custom_1712345678", "Draft");
        req.is_custom = true;
        doc.add_task(req, now()).unwrap();

        doc.apply_mutation(
            TaskMutation::UpdateDetails {
                task_id: "custom_1712345678".to_string(),
                updates: TaskDetailsUpdate {
                    name: Some("Write blog post".to_string()),
                    description: Some("About borrow checking".to_string()),
                    ..Default::default()
                },
            },
            now(),
        )
        .unwrap();
        assert_eq!(doc.tasks[0].name, "Write blog post");
        assert_eq!(doc.tasks[0].description, "About borrow checking");
    }

    #[test]
    fn test_remove_roadmap_cascades_only_its_tasks() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("solo", "Solo"), now()).unwrap();
        doc.add_roadmap(
            import_request(
                "fe",
                "Frontend",
                vec![import_task("a", "A"), import_task("b", "B")],
            ),
            now(),
        )
        .unwrap();
        doc.add_roadmap(import_request("be", "Backend", vec![import_task("a", "A")]), now())
            .unwrap();

        let removed = doc.remove_roadmap("fe").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(doc.roadmaps.len(), 1);
        assert_eq!(doc.roadmaps[0].roadmap_id, "be");
        let ids: Vec<&str> = doc.tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["solo", "be_a"]);
    }

    #[test]
    fn test_remove_roadmap_unknown_id_fails() {
        let mut doc = UserRoadmapDoc::default();
        let err = doc.remove_roadmap("ghost").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_preferences_patch_applies_recognized_keys() {
        let mut doc = UserRoadmapDoc::default();
        doc.apply_preferences(PreferencesPatch {
            default_track: Some("Backend".to_string()),
            show_completed: Some(false),
            sort_by: Some(SortBy::Difficulty),
        })
        .unwrap();
        assert_eq!(doc.preferences.default_track, "Backend");
        assert!(!doc.preferences.show_completed);
        assert_eq!(doc.preferences.sort_by, SortBy::Difficulty);
    }

    #[test]
    fn test_preferences_partial_patch_keeps_others() {
        let mut doc = UserRoadmapDoc::default();
        doc.apply_preferences(PreferencesPatch {
            show_completed: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(doc.preferences.default_track, "General");
        assert_eq!(doc.preferences.sort_by, SortBy::Order);
    }

    #[test]
    fn test_preferences_empty_patch_fails() {
        let mut doc = UserRoadmapDoc::default();
        let err = doc.apply_preferences(PreferencesPatch::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_stats_track_tasks_through_lifecycle() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_task(new_task("t1", "Learn X"), now()).unwrap();
        assert_stats_consistent(&mut doc);
        assert_eq!(doc.stats.total_tasks, 1);

        doc.apply_mutation(
            TaskMutation::UpdateStatus {
                task_id: "t1".to_string(),
                updates: StatusUpdate {
                    status: TaskStatus::Completed,
                },
            },
            now(),
        )
        .unwrap();
        assert_stats_consistent(&mut doc);
        assert_eq!(doc.stats.completed_tasks, 1);

        doc.apply_mutation(
            TaskMutation::Remove {
                task_id: "t1".to_string(),
            },
            now(),
        )
        .unwrap();
        assert_stats_consistent(&mut doc);
        assert_eq!(doc.stats, RoadmapStats::default());
    }

    #[test]
    fn test_import_then_delete_roadmap_roundtrip() {
        let mut doc = UserRoadmapDoc::default();
        doc.add_roadmap(
            import_request(
                "fe",
                "Frontend",
                vec![import_task("a", "A"), import_task("b", "B")],
            ),
            now(),
        )
        .unwrap();
        let ids: Vec<&str> = doc.tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["fe_a", "fe_b"]);

        let removed = doc.remove_roadmap("fe").unwrap();
        assert_eq!(removed, 2);
        assert!(doc.tasks.is_empty());
        assert!(doc.roadmaps.is_empty());
        assert_stats_consistent(&mut doc);
        assert_eq!(doc.stats, RoadmapStats::default());
    }
}
