// In-memory task list store

use crate::filter::SearchFilter;
use crate::models::{Task, TaskId, now_ms};
use serde::Serialize;
use tracing::debug;

/// Edit-mode state machine. A single slot means "at most one task in edit
/// mode" holds by construction rather than by bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
enum EditState {
    #[default]
    Idle,
    Editing { id: TaskId, draft: String },
}

/// Owned, serializable read-model of the store, taken after any mutation.
///
/// The view layer re-reads this instead of observing store internals; the
/// store has no knowledge of whoever renders it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    /// Tasks matching the current search term, insertion order
    pub filtered: Vec<Task>,
    pub editing_id: Option<TaskId>,
    pub editing_text: Option<String>,
    pub search_term: String,
    pub revision: u64,
}

/// In-memory task collection plus the transient edit and search state.
///
/// All mutating operations are infallible: empty text and unknown ids
/// degrade to silent no-ops. Return values report whether anything changed,
/// they are never errors. Insertion order is preserved; completion and
/// editing never re-sort.
#[derive(Debug, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    edit: EditState,
    search: SearchFilter,
    next_id: u64,
    revision: u64,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    // ========================================================================
    // Mutating operations
    // ========================================================================

    /// Append a new incomplete task with the trimmed text.
    ///
    /// Whitespace-only input is a no-op and returns `None`.
    pub fn add_task(&mut self, raw: &str) -> Option<TaskId> {
        let text = raw.trim();
        if text.is_empty() {
            debug!("add_task: empty text, ignoring");
            return None;
        }

        let id = self.fresh_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            created_at: now_ms(),
        });
        self.bump();
        debug!(%id, text, "add_task: appended");
        Some(id)
    }

    /// Remove the task with the given id, if present.
    ///
    /// Deleting the task currently being edited also ends the edit session,
    /// so no dangling edit reference can survive.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!(%id, "delete_task: unknown id, ignoring");
            return false;
        }

        if matches!(self.edit, EditState::Editing { id: editing, .. } if editing == id) {
            self.edit = EditState::Idle;
            debug!(%id, "delete_task: cleared edit session for deleted task");
        }
        self.bump();
        debug!(%id, "delete_task: removed");
        true
    }

    /// Flip the completion flag on the task with the given id.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(%id, "toggle_complete: unknown id, ignoring");
            return false;
        };
        task.completed = !task.completed;
        let completed = task.completed;
        self.bump();
        debug!(%id, completed, "toggle_complete: flipped");
        true
    }

    /// Enter edit mode for the task with the given id, seeding the draft
    /// with its current text. Any prior edit session's draft is discarded.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            debug!(%id, "begin_edit: unknown id, ignoring");
            return false;
        };
        self.edit = EditState::Editing {
            id,
            draft: task.text.clone(),
        };
        self.bump();
        debug!(%id, "begin_edit: session opened");
        true
    }

    /// Replace the edit draft verbatim. No-op when no edit session is open.
    /// The draft stays independent of the task until `save_edit` commits it.
    pub fn set_editing_text(&mut self, text: &str) {
        match &mut self.edit {
            EditState::Editing { draft, .. } => {
                *draft = text.to_string();
                self.bump();
            }
            EditState::Idle => debug!("set_editing_text: no edit session, ignoring"),
        }
    }

    /// Commit the draft as the task's text and end the edit session.
    ///
    /// A whitespace-only draft is a no-op that leaves the session open, and
    /// a `save_edit` for any id other than the one being edited is ignored.
    pub fn save_edit(&mut self, id: TaskId) -> bool {
        let EditState::Editing { id: editing, draft } = &self.edit else {
            debug!(%id, "save_edit: no edit session, ignoring");
            return false;
        };
        if *editing != id {
            debug!(%id, %editing, "save_edit: id does not match edit session, ignoring");
            return false;
        }

        let text = draft.trim();
        if text.is_empty() {
            debug!(%id, "save_edit: empty draft, session stays open");
            return false;
        }
        let text = text.to_string();

        // Edit sessions only open on existing tasks and deletion closes
        // them, so the task is still present here.
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.text = text;
        }
        self.edit = EditState::Idle;
        self.bump();
        debug!(%id, "save_edit: committed");
        true
    }

    /// End the edit session, discarding the draft. The task's stored text
    /// is unchanged. Safe to call when idle.
    pub fn cancel_edit(&mut self) {
        if self.edit == EditState::Idle {
            return;
        }
        self.edit = EditState::Idle;
        self.bump();
        debug!("cancel_edit: session discarded");
    }

    /// Replace the search term verbatim (no trimming)
    pub fn set_search_term(&mut self, term: &str) {
        if self.search.term() == term {
            return;
        }
        self.search.set_term(term);
        self.bump();
        debug!(term, "set_search_term: updated");
    }

    // ========================================================================
    // Read-only views
    // ========================================================================

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id of the task currently being edited, if any
    pub fn editing_id(&self) -> Option<TaskId> {
        match &self.edit {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    /// The in-progress edit draft, if an edit session is open
    pub fn editing_text(&self) -> Option<&str> {
        match &self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    /// Tasks whose text contains the search term case-insensitively,
    /// insertion order preserved. Derived on demand; never mutates `tasks`.
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.search.matches(&task.text))
            .collect()
    }

    /// Counter that advances once per effective state change. No-op
    /// operations leave it untouched, so a view can poll it to decide
    /// whether to re-read the snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Owned copy of the full read-model for the view layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            filtered: self.filtered_view().into_iter().cloned().collect(),
            editing_id: self.editing_id(),
            editing_text: self.editing_text().map(str::to_string),
            search_term: self.search.term().to_string(),
            revision: self.revision,
        }
    }
}
