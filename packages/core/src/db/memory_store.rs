//! In-Memory ModuleStore
//!
//! A `HashMap`-backed [`ModuleStore`] used by the test suite and by
//! embedders that have no backend wired up yet. Besides the trait contract
//! it exposes failure injection (one-shot delete/upsert failures) and call
//! counters, which the save-phase-ordering and concurrent-save tests rely
//! on.

use crate::db::module_store::ModuleStore;
use crate::models::Module;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Counters for store calls, readable from tests.
#[derive(Debug, Default)]
pub struct StoreCallCounts {
    pub list: AtomicUsize,
    pub delete: AtomicUsize,
    pub upsert: AtomicUsize,
}

/// In-memory module store keyed by module id.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<String, Module>>,
    fail_next_delete: AtomicBool,
    fail_next_upsert: AtomicBool,
    pub calls: StoreCallCounts,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing rows.
    pub async fn seed(&self, modules: Vec<Module>) {
        let mut rows = self.rows.write().await;
        for module in modules {
            rows.insert(module.id.clone(), module);
        }
    }

    /// Make the next `delete_modules` call fail.
    pub fn fail_next_delete(&self) {
        self.fail_next_delete.store(true, Ordering::SeqCst);
    }

    /// Make the next `upsert_modules` call fail.
    pub fn fail_next_upsert(&self) {
        self.fail_next_upsert.store(true, Ordering::SeqCst);
    }

    /// Snapshot of all rows, for assertions.
    pub async fn all_rows(&self) -> Vec<Module> {
        let rows = self.rows.read().await;
        let mut out: Vec<Module> = rows.values().cloned().collect();
        out.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        out
    }
}

#[async_trait]
impl ModuleStore for MemoryStore {
    async fn list_modules(&self, page_id: &str) -> Result<Vec<Module>> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.read().await;
        let mut out: Vec<Module> = rows
            .values()
            .filter(|m| m.page_id == page_id)
            .cloned()
            .collect();
        // Stable ascending order; equal sort_order rows tie-break by id so
        // the listing is deterministic.
        out.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn delete_modules(&self, ids: &[String]) -> Result<()> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_delete.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("injected delete failure"));
        }
        let mut rows = self.rows.write().await;
        for id in ids {
            rows.remove(id);
        }
        Ok(())
    }

    async fn upsert_modules(&self, modules: Vec<Module>) -> Result<()> {
        self.calls.upsert.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_upsert.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("injected upsert failure"));
        }
        let mut rows = self.rows.write().await;
        for module in modules {
            rows.insert(module.id.clone(), module);
        }
        Ok(())
    }
}
