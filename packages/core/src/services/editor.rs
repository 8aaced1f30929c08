//! Module List Editor - Orchestrator
//!
//! Owns the in-memory ordered list of modules for one page, plus the
//! immutable snapshot it was loaded from. All list mutations (add, update,
//! delete, duplicate, move, drag application, span resize) are synchronous;
//! only `load` and `save` suspend on the record store.
//!
//! # Dirty tracking
//!
//! Dirty state is a pure function of the two lists: deep equality between
//! the working list and the snapshot. It is never cached, so no mutation
//! path can forget to update it.
//!
//! # Save reconciliation
//!
//! `save` diffs working ids against snapshot ids and issues two sequential
//! store calls: a bulk delete for removed ids (skipped when empty), then a
//! bulk upsert of the working list with `sort_order` rewritten to the dense
//! `0..N-1` range. On success it reloads from the store; on any failure the
//! working list stays untouched and dirty. A second `save` while one is in
//! flight is rejected with [`EditorError::SaveInFlight`] - both would race
//! on the removed-id diff against a stale snapshot. There is no version
//! check against the store; last writer wins.

use crate::db::ModuleStore;
use crate::drag::{apply_drag_end, DragEndEvent};
use crate::models::{Module, ModuleType};
use crate::services::error::EditorError;
use crate::services::resize::snap_span;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Debug, Default)]
struct EditorState {
    working: Vec<Module>,
    snapshot: Vec<Module>,
}

/// Orchestrator for one page's module list.
///
/// Methods take `&self`; list state lives behind a mutex so a host can hold
/// the editor in an `Arc` the way services are shared elsewhere. The lock
/// is never held across an await point.
pub struct ModuleListEditor {
    store: Arc<dyn ModuleStore>,
    page_id: String,
    can_edit: bool,
    state: Mutex<EditorState>,
    saving: AtomicBool,
}

impl ModuleListEditor {
    /// Create an editor for a page.
    ///
    /// `can_edit` is the host-supplied capability flag: when false, every
    /// mutating operation returns [`EditorError::ReadOnly`] while `load`
    /// and the read accessors keep working for read-only rendering.
    pub fn new(store: Arc<dyn ModuleStore>, page_id: impl Into<String>, can_edit: bool) -> Self {
        Self {
            store,
            page_id: page_id.into(),
            can_edit,
            state: Mutex::new(EditorState::default()),
            saving: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn require_edit(&self) -> Result<(), EditorError> {
        if self.can_edit {
            Ok(())
        } else {
            Err(EditorError::ReadOnly)
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn can_edit(&self) -> bool {
        self.can_edit
    }

    /// Current working list (cloned out; the internal list is swapped
    /// atomically and never shared by reference).
    pub fn modules(&self) -> Vec<Module> {
        self.state().working.clone()
    }

    /// Whether the working list differs from the last-loaded snapshot.
    pub fn is_dirty(&self) -> bool {
        let state = self.state();
        state.working != state.snapshot
    }

    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Fetch the page's modules from the store, replacing both the working
    /// list and the snapshot.
    ///
    /// Legacy rows are coerced on the way in (missing/invalid span to 12,
    /// negative row index to 0). On failure the previous lists are kept.
    pub async fn load(&self) -> Result<(), EditorError> {
        let mut rows = self
            .store
            .list_modules(&self.page_id)
            .await
            .map_err(|e| EditorError::load_failed(&self.page_id, e))?;
        for row in &mut rows {
            row.normalize();
        }

        tracing::debug!(page_id = %self.page_id, count = rows.len(), "loaded modules");

        let mut state = self.state();
        state.working = rows.clone();
        state.snapshot = rows;
        Ok(())
    }

    /// Append a new module with default content for `module_type`.
    ///
    /// Returns a clone of the created module.
    pub fn add(&self, module_type: ModuleType) -> Result<Module, EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        let module = Module::new(&self.page_id, module_type, state.working.len() as i64);
        state.working.push(module.clone());
        Ok(module)
    }

    /// Replace the module with a matching id, stamping `modified_at`.
    ///
    /// A missing id is a silent no-op.
    pub fn update(&self, mut module: Module) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        if let Some(slot) = state.working.iter_mut().find(|m| m.id == module.id) {
            module.modified_at = Utc::now();
            *slot = module;
        }
        Ok(())
    }

    /// Remove the module with a matching id. A missing id is a no-op.
    pub fn delete(&self, id: &str) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        state.working.retain(|m| m.id != id);
        Ok(())
    }

    /// Deep-copy a module, inserting the copy immediately after the
    /// original.
    ///
    /// The copy gets a fresh id, a " (Copy)" title suffix ("(Copy)" alone
    /// when the original is untitled), fresh timestamps, and `sort_order`
    /// set to the current length - a display hint only, since save rewrites
    /// order densely.
    pub fn duplicate(&self, id: &str) -> Result<Module, EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        let index = state
            .working
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| EditorError::module_not_found(id))?;

        let mut copy = state.working[index].clone();
        copy.id = Uuid::new_v4().to_string();
        copy.title = Some(match &state.working[index].title {
            Some(title) => format!("{title} (Copy)"),
            None => "(Copy)".to_string(),
        });
        copy.sort_order = state.working.len() as i64;
        let now = Utc::now();
        copy.created_at = now;
        copy.modified_at = now;

        state.working.insert(index + 1, copy.clone());
        Ok(copy)
    }

    /// Swap the module at `index` with its previous sibling. No-op at the
    /// top boundary or out of range.
    pub fn move_up(&self, index: usize) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        if index > 0 && index < state.working.len() {
            state.working.swap(index - 1, index);
        }
        Ok(())
    }

    /// Swap the module at `index` with its next sibling. No-op at the
    /// bottom boundary or out of range.
    pub fn move_down(&self, index: usize) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        if state.working.len() > 1 && index < state.working.len() - 1 {
            state.working.swap(index, index + 1);
        }
        Ok(())
    }

    /// Apply a completed drag to the working list.
    ///
    /// Delegates to the migration engine, which returns a new list; the
    /// swap is atomic from the perspective of any reader.
    pub fn apply_drag_end(&self, event: &DragEndEvent) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        let current = std::mem::take(&mut state.working);
        state.working = apply_drag_end(current, event);
        Ok(())
    }

    /// Set a module's column span, snapping to the grid's snap set.
    ///
    /// Called live on every qualifying pointer move during a resize; a
    /// missing id is a no-op.
    pub fn set_column_span(&self, id: &str, span: i64) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        if let Some(module) = state.working.iter_mut().find(|m| m.id == id) {
            module.column_span = snap_span(span);
            module.modified_at = Utc::now();
        }
        Ok(())
    }

    /// Persist the working list: delete removed modules, upsert the rest
    /// with dense `sort_order`, then reload.
    ///
    /// Phases are strictly sequential; a delete-phase failure prevents the
    /// upsert phase from resurrecting modules whose deletion was intended.
    pub async fn save(&self) -> Result<(), EditorError> {
        self.require_edit()?;
        if self.saving.swap(true, Ordering::SeqCst) {
            return Err(EditorError::SaveInFlight);
        }
        let result = self.save_inner().await;
        self.saving.store(false, Ordering::SeqCst);
        result
    }

    async fn save_inner(&self) -> Result<(), EditorError> {
        let (removed_ids, payload) = {
            let state = self.state();
            let working_ids: HashSet<&str> =
                state.working.iter().map(|m| m.id.as_str()).collect();
            let removed_ids: Vec<String> = state
                .snapshot
                .iter()
                .filter(|m| !working_ids.contains(m.id.as_str()))
                .map(|m| m.id.clone())
                .collect();

            let mut payload = state.working.clone();
            for (index, module) in payload.iter_mut().enumerate() {
                module.sort_order = index as i64;
            }
            (removed_ids, payload)
        };

        tracing::info!(
            page_id = %self.page_id,
            deletes = removed_ids.len(),
            upserts = payload.len(),
            "saving module list"
        );

        if !removed_ids.is_empty() {
            self.store
                .delete_modules(&removed_ids)
                .await
                .map_err(EditorError::DeletePhaseFailed)?;
        }

        self.store
            .upsert_modules(payload)
            .await
            .map_err(EditorError::UpsertPhaseFailed)?;

        // Reload so the snapshot reflects exactly what the store now holds.
        let mut rows = self
            .store
            .list_modules(&self.page_id)
            .await
            .map_err(|e| EditorError::load_failed(&self.page_id, e))?;
        for row in &mut rows {
            row.normalize();
        }

        let mut state = self.state();
        state.working = rows.clone();
        state.snapshot = rows;
        Ok(())
    }

    /// Discard the working list and restore the snapshot.
    ///
    /// With unsaved changes this demands `confirmed = true`; the host exits
    /// edit mode after a successful cancel.
    pub fn cancel(&self, confirmed: bool) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        if state.working != state.snapshot && !confirmed {
            return Err(EditorError::UnsavedChanges);
        }
        state.working = state.snapshot.clone();
        Ok(())
    }

    /// Restore the working list to the snapshot without confirmation.
    ///
    /// Unlike `cancel`, the host stays in edit mode.
    pub fn undo(&self) -> Result<(), EditorError> {
        self.require_edit()?;
        let mut state = self.state();
        state.working = state.snapshot.clone();
        Ok(())
    }
}
