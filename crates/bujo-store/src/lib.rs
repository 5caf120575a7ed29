//! Persistence for the journal document plus the session sidecars
//! (config and state). The document is read and rewritten wholesale;
//! a load that fails for any reason degrades to an empty journal with
//! a warning instead of an error.

use bujo_core::{format_timestamp, Category, Document, Priority};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const DATA_DIR: &str = ".bujo";
pub const DOCUMENT_FILE: &str = "tareas.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct JournalPaths {
    pub root: PathBuf,
    pub document_path: PathBuf,
    pub config_path: PathBuf,
    pub state_path: PathBuf,
}

impl JournalPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data = root.join(DATA_DIR);
        Self {
            document_path: data.join(DOCUMENT_FILE),
            config_path: data.join("config.json"),
            state_path: data.join("state.json"),
            root,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalConfig {
    pub global: Option<GlobalConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    pub default_priority: Option<String>,
    pub default_category: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalState {
    #[serde(default)]
    pub current_project: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

/// Loads the persisted document. Missing, unreadable, or malformed files
/// all yield the empty document; the latter two also surface a warning.
pub fn load_document(paths: &JournalPaths) -> Document {
    if !paths.document_path.exists() {
        return Document::default();
    }
    let content = match fs::read_to_string(&paths.document_path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "failed to read {}: {err}; starting with an empty journal",
                paths.document_path.display()
            );
            return Document::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(err) => {
            warn!(
                "failed to parse {}: {err}; starting with an empty journal",
                paths.document_path.display()
            );
            Document::default()
        }
    }
}

/// Rewrites the whole document: serialize, write a temp file, rename over
/// the old copy.
pub fn save_document(paths: &JournalPaths, document: &Document) -> Result<(), StoreError> {
    let payload = serde_json::to_string_pretty(document)?;
    write_file(&paths.document_path, &payload)
}

pub fn load_config(paths: &JournalPaths) -> Option<JournalConfig> {
    let mut candidates = Vec::new();
    if paths.config_path.exists() {
        candidates.push(paths.config_path.clone());
    } else if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(DATA_DIR).join("config.json"));
    }

    for path in candidates {
        if let Ok(content) = fs::read_to_string(&path) {
            match serde_json::from_str::<JournalConfig>(&content) {
                Ok(config) => return Some(config),
                Err(err) => {
                    warn!("failed to parse {}: {err}", path.display());
                }
            }
        }
    }
    None
}

pub fn load_state(paths: &JournalPaths) -> JournalState {
    if let Ok(content) = fs::read_to_string(&paths.state_path) {
        if let Ok(state) = serde_json::from_str::<JournalState>(&content) {
            return state;
        }
    }
    JournalState::default()
}

pub fn save_state(paths: &JournalPaths, state: &JournalState) -> Result<(), StoreError> {
    let payload = serde_json::to_string_pretty(state)?;
    write_file(&paths.state_path, &payload)
}

fn write_file(path: &Path, payload: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload).map_err(|source| StoreError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// One user session over the journal: the in-memory document plus the
/// sidecar config and state. Every successful mutation rewrites the file;
/// a failed save keeps the in-memory change and warns.
pub struct Journal {
    paths: JournalPaths,
    config: Option<JournalConfig>,
    state: JournalState,
    document: Document,
}

impl Journal {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let paths = JournalPaths::new(root);
        let config = load_config(&paths);
        let state = load_state(&paths);
        let document = load_document(&paths);
        Self {
            paths,
            config,
            state,
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn paths(&self) -> &JournalPaths {
        &self.paths
    }

    pub fn current_project(&self) -> Option<&str> {
        self.state
            .current_project
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Explicit argument wins, otherwise the selection remembered in state.
    pub fn resolve_project(&self, override_name: Option<&str>) -> Option<String> {
        if let Some(name) = override_name {
            let name = name.trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
        self.current_project().map(str::to_string)
    }

    pub fn resolve_priority(&self, override_priority: Option<Priority>) -> Priority {
        if let Some(priority) = override_priority {
            return priority;
        }
        if let Some(config) = &self.config {
            if let Some(global) = &config.global {
                if let Some(priority) = global.default_priority.as_ref() {
                    if let Ok(parsed) = priority.parse::<Priority>() {
                        return parsed;
                    }
                }
            }
        }
        Priority::default()
    }

    pub fn resolve_category(&self, override_category: Option<Category>) -> Category {
        if let Some(category) = override_category {
            return category;
        }
        if let Some(config) = &self.config {
            if let Some(global) = &config.global {
                if let Some(category) = global.default_category.as_ref() {
                    if let Ok(parsed) = category.parse::<Category>() {
                        return parsed;
                    }
                }
            }
        }
        Category::default()
    }

    pub fn add_daily_task(&mut self, description: &str, date: Option<NaiveDate>) -> bool {
        let date = date.unwrap_or_else(today);
        let ok = self.document.add_daily_task(description, date);
        if ok {
            self.persist();
        }
        ok
    }

    pub fn toggle_daily_task(&mut self, index: usize) -> bool {
        let ok = self.document.toggle_daily_task(index);
        if ok {
            self.persist();
        }
        ok
    }

    pub fn delete_daily_task(&mut self, index: usize) -> bool {
        let ok = self.document.delete_daily_task(index);
        if ok {
            self.persist();
        }
        ok
    }

    /// Creates the project and makes it the current selection.
    pub fn create_project(&mut self, name: &str) -> bool {
        let name = name.trim();
        let ok = self.document.create_project(name, today());
        if ok {
            self.state.current_project = Some(name.to_string());
            self.persist();
        }
        ok
    }

    /// Remembers `name` as the current project; fails if it does not exist.
    pub fn select_project(&mut self, name: &str) -> bool {
        let name = name.trim();
        if !self.document.projects.contains_key(name) {
            return false;
        }
        self.state.current_project = Some(name.to_string());
        if let Err(err) = save_state(&self.paths, &self.state) {
            warn!("failed to update journal state: {err}");
        }
        true
    }

    pub fn delete_project(&mut self, name: &str) -> bool {
        let name = name.trim();
        let ok = self.document.delete_project(name);
        if ok {
            if self.state.current_project.as_deref() == Some(name) {
                self.state.current_project = None;
            }
            self.persist();
        }
        ok
    }

    pub fn add_project_task(
        &mut self,
        project: &str,
        description: &str,
        deadline: Option<NaiveDate>,
        priority: Option<Priority>,
    ) -> bool {
        let priority = self.resolve_priority(priority);
        let ok = self
            .document
            .add_project_task(project, description, deadline, priority, today());
        if ok {
            self.persist();
        }
        ok
    }

    pub fn toggle_project_task(&mut self, project: &str, index: usize) -> bool {
        let ok = self.document.toggle_project_task(project, index);
        if ok {
            self.persist();
        }
        ok
    }

    pub fn set_task_priority(&mut self, project: &str, index: usize, priority: Priority) -> bool {
        let ok = self.document.set_task_priority(project, index, priority);
        if ok {
            self.persist();
        }
        ok
    }

    pub fn set_project_deadline(&mut self, project: &str, deadline: Option<NaiveDate>) -> bool {
        let ok = self.document.set_project_deadline(project, deadline);
        if ok {
            self.persist();
        }
        ok
    }

    pub fn delete_project_task(&mut self, project: &str, index: usize) -> bool {
        let ok = self.document.delete_project_task(project, index);
        if ok {
            self.persist();
        }
        ok
    }

    pub fn add_log_entry(
        &mut self,
        title: &str,
        content: &str,
        category: Option<Category>,
        related_task: Option<String>,
    ) -> bool {
        let category = self.resolve_category(category);
        let ok = self
            .document
            .add_log_entry(title, content, category, related_task, now());
        if ok {
            self.persist();
        }
        ok
    }

    pub fn edit_log_entry(
        &mut self,
        index: usize,
        title: &str,
        content: &str,
        category: Category,
    ) -> bool {
        let ok = self
            .document
            .edit_log_entry(index, title, content, category, now());
        if ok {
            self.persist();
        }
        ok
    }

    pub fn delete_log_entry(&mut self, index: usize) -> bool {
        let ok = self.document.delete_log_entry(index);
        if ok {
            self.persist();
        }
        ok
    }

    fn persist(&mut self) {
        if let Err(err) = save_document(&self.paths, &self.document) {
            warn!("failed to save journal document: {err}");
            return;
        }
        self.state.last_updated = Some(format_timestamp(now()));
        if let Err(err) = save_state(&self.paths, &self.state) {
            warn!("failed to update journal state: {err}");
        }
        debug!("journal saved to {}", self.paths.document_path.display());
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
