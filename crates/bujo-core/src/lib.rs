use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub mod calendar;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The whole journal: daily tasks, named projects, and the notes log.
/// This is the unit of persistence; the store reads and rewrites it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, rename = "diarias")]
    pub daily: Vec<DailyTask>,
    #[serde(default, rename = "proyectos")]
    pub projects: IndexMap<String, Project>,
    #[serde(default, rename = "bitacora")]
    pub log: Vec<LogEntry>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTask {
    #[serde(rename = "descripcion")]
    pub description: String,
    /// ISO date string; kept as text so malformed values survive a reload.
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "completada")]
    pub completed: bool,
    #[serde(rename = "tipo", default = "daily_kind")]
    pub kind: String,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

impl DailyTask {
    pub fn new(description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            date: format_date(date),
            completed: false,
            kind: daily_kind(),
            extra: HashMap::new(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, rename = "tareas")]
    pub tasks: Vec<ProjectTask>,
    /// Derived completion percentage, one decimal. Recomputed from scratch
    /// after every task mutation; never settable on its own.
    #[serde(default, rename = "progreso")]
    pub progress: f64,
    #[serde(rename = "fecha_creacion")]
    pub created_on: String,
    /// Empty string means no deadline.
    #[serde(default, rename = "fecha_limite")]
    pub deadline: String,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

impl Project {
    pub fn new(created_on: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            progress: 0.0,
            created_on: format_date(created_on),
            deadline: String::new(),
            extra: HashMap::new(),
        }
    }

    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_date(&self.deadline)
    }

    pub fn recompute_progress(&mut self) {
        if self.tasks.is_empty() {
            self.progress = 0.0;
            return;
        }
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        self.progress = round1(completed as f64 / self.tasks.len() as f64 * 100.0);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTask {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha_creacion")]
    pub created_on: String,
    #[serde(default, rename = "fecha_limite")]
    pub deadline: String,
    #[serde(default, rename = "completada")]
    pub completed: bool,
    #[serde(default, rename = "prioridad")]
    pub priority: Priority,
    #[serde(rename = "tipo", default = "project_kind")]
    pub kind: String,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

impl ProjectTask {
    pub fn new(
        description: impl Into<String>,
        created_on: NaiveDate,
        deadline: Option<NaiveDate>,
        priority: Priority,
    ) -> Self {
        Self {
            description: description.into(),
            created_on: format_date(created_on),
            deadline: deadline.map(format_date).unwrap_or_default(),
            completed: false,
            priority,
            kind: project_kind(),
            extra: HashMap::new(),
        }
    }

    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_date(&self.deadline)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "contenido")]
    pub content: String,
    /// Second-precision local timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "fecha")]
    pub timestamp: String,
    #[serde(default, rename = "categoria")]
    pub category: Category,
    /// Free-text snapshot of another task's label, not a live reference.
    #[serde(default, rename = "tarea_relacionada")]
    pub related_task: Option<String>,
    #[serde(
        default,
        rename = "editado",
        skip_serializing_if = "Option::is_none"
    )]
    pub edited_at: Option<String>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

impl LogEntry {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        related_task: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp: format_timestamp(created_at),
            category,
            related_task,
            edited_at: None,
            extra: HashMap::new(),
        }
    }

    pub fn timestamp_value(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Baja")]
    Low,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Alta")]
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Baja",
            Priority::Medium => "Media",
            Priority::High => "Alta",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "baja" | "low" => Ok(Priority::Low),
            "media" | "medium" => Ok(Priority::Medium),
            "alta" | "high" => Ok(Priority::High),
            other => Err(format!("Unknown priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    General,
    Idea,
    #[serde(rename = "Problema")]
    Problem,
    #[serde(rename = "Solución")]
    Solution,
    #[serde(rename = "Logro")]
    Achievement,
    #[serde(rename = "Recordatorio")]
    Reminder,
}

impl Default for Category {
    fn default() -> Self {
        Self::General
    }
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Idea,
        Category::Problem,
        Category::Solution,
        Category::Achievement,
        Category::Reminder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Idea => "Idea",
            Category::Problem => "Problema",
            Category::Solution => "Solución",
            Category::Achievement => "Logro",
            Category::Reminder => "Recordatorio",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "general" => Ok(Category::General),
            "idea" => Ok(Category::Idea),
            "problema" | "problem" => Ok(Category::Problem),
            "solución" | "solucion" | "solution" => Ok(Category::Solution),
            "logro" | "achievement" => Ok(Category::Achievement),
            "recordatorio" | "reminder" => Ok(Category::Reminder),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

impl Document {
    pub fn add_daily_task(&mut self, description: &str, date: NaiveDate) -> bool {
        let description = description.trim();
        if description.is_empty() {
            return false;
        }
        self.daily.push(DailyTask::new(description, date));
        true
    }

    pub fn toggle_daily_task(&mut self, index: usize) -> bool {
        match self.daily.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn delete_daily_task(&mut self, index: usize) -> bool {
        if index >= self.daily.len() {
            return false;
        }
        self.daily.remove(index);
        true
    }

    pub fn create_project(&mut self, name: &str, today: NaiveDate) -> bool {
        let name = name.trim();
        if name.is_empty() || self.projects.contains_key(name) {
            return false;
        }
        self.projects.insert(name.to_string(), Project::new(today));
        true
    }

    pub fn add_project_task(
        &mut self,
        project: &str,
        description: &str,
        deadline: Option<NaiveDate>,
        priority: Priority,
        today: NaiveDate,
    ) -> bool {
        let description = description.trim();
        if description.is_empty() {
            return false;
        }
        match self.projects.get_mut(project) {
            Some(entry) => {
                entry
                    .tasks
                    .push(ProjectTask::new(description, today, deadline, priority));
                entry.recompute_progress();
                true
            }
            None => false,
        }
    }

    pub fn toggle_project_task(&mut self, project: &str, index: usize) -> bool {
        match self.projects.get_mut(project) {
            Some(entry) => match entry.tasks.get_mut(index) {
                Some(task) => {
                    task.completed = !task.completed;
                    entry.recompute_progress();
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub fn set_task_priority(&mut self, project: &str, index: usize, priority: Priority) -> bool {
        match self
            .projects
            .get_mut(project)
            .and_then(|entry| entry.tasks.get_mut(index))
        {
            Some(task) => {
                task.priority = priority;
                true
            }
            None => false,
        }
    }

    pub fn set_project_deadline(&mut self, project: &str, deadline: Option<NaiveDate>) -> bool {
        match self.projects.get_mut(project) {
            Some(entry) => {
                entry.deadline = deadline.map(format_date).unwrap_or_default();
                true
            }
            None => false,
        }
    }

    pub fn delete_project_task(&mut self, project: &str, index: usize) -> bool {
        match self.projects.get_mut(project) {
            Some(entry) => {
                if index >= entry.tasks.len() {
                    return false;
                }
                entry.tasks.remove(index);
                entry.recompute_progress();
                true
            }
            None => false,
        }
    }

    pub fn delete_project(&mut self, name: &str) -> bool {
        self.projects.shift_remove(name).is_some()
    }

    pub fn add_log_entry(
        &mut self,
        title: &str,
        content: &str,
        category: Category,
        related_task: Option<String>,
        created_at: NaiveDateTime,
    ) -> bool {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return false;
        }
        self.log
            .push(LogEntry::new(title, content, category, related_task, created_at));
        true
    }

    pub fn edit_log_entry(
        &mut self,
        index: usize,
        title: &str,
        content: &str,
        category: Category,
        edited_at: NaiveDateTime,
    ) -> bool {
        match self.log.get_mut(index) {
            Some(entry) => {
                entry.title = title.trim().to_string();
                entry.content = content.trim().to_string();
                entry.category = category;
                entry.edited_at = Some(format_timestamp(edited_at));
                true
            }
            None => false,
        }
    }

    pub fn delete_log_entry(&mut self, index: usize) -> bool {
        if index >= self.log.len() {
            return false;
        }
        self.log.remove(index);
        true
    }

    /// Labels for every pending task, usable as `related_task` values:
    /// `"Diaria: <desc>"` for daily tasks, `"Proyecto <name>: <desc>"` for
    /// project tasks.
    pub fn pending_task_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        for task in &self.daily {
            if !task.completed {
                labels.push(format!("Diaria: {}", task.description));
            }
        }
        for (name, project) in &self.projects {
            for task in &project.tasks {
                if !task.completed {
                    labels.push(format!("Proyecto {name}: {}", task.description));
                }
            }
        }
        labels
    }

    /// Log entries with their positional indices, optionally restricted to a
    /// category and ordered by timestamp. Entries whose timestamp does not
    /// parse sort after all dated ones regardless of direction.
    pub fn log_entries_filtered(
        &self,
        category: Option<Category>,
        newest_first: bool,
    ) -> Vec<(usize, &LogEntry)> {
        let mut entries: Vec<(usize, &LogEntry)> = self
            .log
            .iter()
            .enumerate()
            .filter(|(_, entry)| category.map_or(true, |wanted| entry.category == wanted))
            .collect();
        entries.sort_by(|(_, a), (_, b)| {
            match (a.timestamp_value(), b.timestamp_value()) {
                (Some(left), Some(right)) => {
                    if newest_first {
                        right.cmp(&left)
                    } else {
                        left.cmp(&right)
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        entries
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Lenient date parsing: empty or malformed input is "no date", not an error.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn daily_kind() -> String {
    "diarias".to_string()
}

fn project_kind() -> String {
    "proyecto".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn moment(hms: (u32, u32, u32)) -> NaiveDateTime {
        day(2024, 3, 5)
            .and_hms_opt(hms.0, hms.1, hms.2)
            .expect("valid time")
    }

    #[test]
    fn add_daily_task_rejects_blank_description() {
        let mut doc = Document::default();
        assert!(!doc.add_daily_task("", day(2024, 3, 5)));
        assert!(!doc.add_daily_task("   ", day(2024, 3, 5)));
        assert!(doc.daily.is_empty());
    }

    #[test]
    fn added_daily_task_carries_defaults() {
        let mut doc = Document::default();
        assert!(doc.add_daily_task("Comprar leche", day(2024, 3, 5)));
        let task = &doc.daily[0];
        assert_eq!(task.date, "2024-03-05");
        assert!(!task.completed);
        assert_eq!(task.kind, "diarias");
    }

    #[test]
    fn toggling_twice_restores_original_state() {
        let mut doc = Document::default();
        doc.add_daily_task("x", day(2024, 1, 1));
        assert!(doc.toggle_daily_task(0));
        assert!(doc.daily[0].completed);
        assert!(doc.toggle_daily_task(0));
        assert!(!doc.daily[0].completed);
    }

    #[test]
    fn toggle_out_of_range_reports_failure() {
        let mut doc = Document::default();
        assert!(!doc.toggle_daily_task(0));
        assert!(!doc.delete_daily_task(3));
    }

    #[test]
    fn duplicate_project_name_is_rejected_without_mutation() {
        let mut doc = Document::default();
        assert!(doc.create_project("Casa", day(2024, 1, 1)));
        assert!(doc.set_project_deadline("Casa", Some(day(2024, 6, 1))));
        assert!(!doc.create_project("Casa", day(2024, 2, 2)));
        let project = &doc.projects["Casa"];
        assert_eq!(project.created_on, "2024-01-01");
        assert_eq!(project.deadline, "2024-06-01");
    }

    #[test]
    fn blank_project_name_is_rejected() {
        let mut doc = Document::default();
        assert!(!doc.create_project("  ", day(2024, 1, 1)));
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn progress_tracks_completion_ratio() {
        let mut doc = Document::default();
        doc.create_project("Casa", day(2024, 1, 1));
        for label in ["a", "b", "c", "d"] {
            assert!(doc.add_project_task(
                "Casa",
                label,
                None,
                Priority::default(),
                day(2024, 1, 2)
            ));
        }
        assert_eq!(doc.projects["Casa"].progress, 0.0);
        assert!(doc.toggle_project_task("Casa", 0));
        assert_eq!(doc.projects["Casa"].progress, 25.0);
        assert!(doc.toggle_project_task("Casa", 1));
        assert_eq!(doc.projects["Casa"].progress, 50.0);
        assert!(doc.toggle_project_task("Casa", 1));
        assert_eq!(doc.projects["Casa"].progress, 25.0);
    }

    #[test]
    fn progress_resets_when_last_task_is_deleted() {
        let mut doc = Document::default();
        doc.create_project("Casa", day(2024, 1, 1));
        doc.add_project_task("Casa", "a", None, Priority::High, day(2024, 1, 2));
        doc.toggle_project_task("Casa", 0);
        assert_eq!(doc.projects["Casa"].progress, 100.0);
        assert!(doc.delete_project_task("Casa", 0));
        assert_eq!(doc.projects["Casa"].progress, 0.0);
    }

    #[test]
    fn progress_rounds_to_one_decimal() {
        let mut doc = Document::default();
        doc.create_project("Casa", day(2024, 1, 1));
        for label in ["a", "b", "c"] {
            doc.add_project_task("Casa", label, None, Priority::default(), day(2024, 1, 2));
        }
        doc.toggle_project_task("Casa", 0);
        assert_eq!(doc.projects["Casa"].progress, 33.3);
    }

    #[test]
    fn operations_on_missing_project_fail() {
        let mut doc = Document::default();
        assert!(!doc.add_project_task("nope", "x", None, Priority::Low, day(2024, 1, 1)));
        assert!(!doc.toggle_project_task("nope", 0));
        assert!(!doc.set_project_deadline("nope", None));
        assert!(!doc.delete_project("nope"));
    }

    #[test]
    fn log_entry_requires_title_and_content() {
        let mut doc = Document::default();
        assert!(!doc.add_log_entry("", "body", Category::Idea, None, moment((10, 0, 0))));
        assert!(!doc.add_log_entry("title", "  ", Category::Idea, None, moment((10, 0, 0))));
        assert!(doc.log.is_empty());
        assert!(doc.add_log_entry("title", "body", Category::Idea, None, moment((10, 0, 0))));
        assert_eq!(doc.log[0].timestamp, "2024-03-05 10:00:00");
        assert!(doc.log[0].edited_at.is_none());
    }

    #[test]
    fn editing_a_log_entry_stamps_the_edit_time() {
        let mut doc = Document::default();
        doc.add_log_entry("t", "c", Category::General, None, moment((9, 0, 0)));
        assert!(doc.edit_log_entry(0, "t2", "c2", Category::Solution, moment((11, 30, 0))));
        let entry = &doc.log[0];
        assert_eq!(entry.title, "t2");
        assert_eq!(entry.category, Category::Solution);
        assert_eq!(entry.edited_at.as_deref(), Some("2024-03-05 11:30:00"));
        assert!(!doc.edit_log_entry(5, "x", "y", Category::General, moment((12, 0, 0))));
    }

    #[test]
    fn pending_task_labels_skip_completed_tasks() {
        let mut doc = Document::default();
        doc.add_daily_task("leche", day(2024, 3, 5));
        doc.add_daily_task("pan", day(2024, 3, 5));
        doc.toggle_daily_task(1);
        doc.create_project("Casa", day(2024, 1, 1));
        doc.add_project_task("Casa", "pintar", None, Priority::default(), day(2024, 1, 2));
        assert_eq!(
            doc.pending_task_labels(),
            vec!["Diaria: leche".to_string(), "Proyecto Casa: pintar".to_string()]
        );
    }

    #[test]
    fn log_filter_and_order() {
        let mut doc = Document::default();
        doc.add_log_entry("a", "x", Category::Idea, None, moment((9, 0, 0)));
        doc.add_log_entry("b", "x", Category::General, None, moment((10, 0, 0)));
        doc.add_log_entry("c", "x", Category::Idea, None, moment((11, 0, 0)));
        doc.log[1].timestamp = "garbage".to_string();

        let ideas: Vec<&str> = doc
            .log_entries_filtered(Some(Category::Idea), true)
            .iter()
            .map(|(_, entry)| entry.title.as_str())
            .collect();
        assert_eq!(ideas, vec!["c", "a"]);

        let all: Vec<usize> = doc
            .log_entries_filtered(None, false)
            .iter()
            .map(|(index, _)| *index)
            .collect();
        // the unparseable entry sorts last and keeps its original index
        assert_eq!(all, vec![0, 2, 1]);
    }

    #[test]
    fn wire_format_uses_original_field_names() {
        let mut doc = Document::default();
        doc.add_daily_task("leche", day(2024, 3, 5));
        doc.create_project("Casa", day(2024, 1, 1));
        doc.add_project_task("Casa", "pintar", Some(day(2024, 6, 1)), Priority::High, day(2024, 1, 2));
        doc.add_log_entry("idea", "body", Category::Solution, None, moment((10, 0, 0)));

        let value = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(value["diarias"][0]["descripcion"], "leche");
        assert_eq!(value["diarias"][0]["tipo"], "diarias");
        assert_eq!(value["proyectos"]["Casa"]["progreso"], 0.0);
        assert_eq!(value["proyectos"]["Casa"]["fecha_creacion"], "2024-01-01");
        assert_eq!(value["proyectos"]["Casa"]["tareas"][0]["prioridad"], "Alta");
        assert_eq!(value["proyectos"]["Casa"]["tareas"][0]["tipo"], "proyecto");
        assert_eq!(value["bitacora"][0]["categoria"], "Solución");
        // absent until the entry is edited, but the related-task slot is always written
        assert!(value["bitacora"][0].get("editado").is_none());
        assert_eq!(value["bitacora"][0]["tarea_relacionada"], Value::Null);
    }

    #[test]
    fn older_documents_without_new_collections_deserialize() {
        let doc: Document = serde_json::from_str(r#"{"diarias": [{"descripcion": "x", "fecha": "2024-03-05"}]}"#)
            .expect("parse");
        assert_eq!(doc.daily.len(), 1);
        assert!(!doc.daily[0].completed);
        assert!(doc.projects.is_empty());
        assert!(doc.log.is_empty());
    }

    #[test]
    fn unknown_keys_round_trip() {
        let raw = r#"{"diarias": [], "proyectos": {}, "bitacora": [], "tema": "oscuro"}"#;
        let doc: Document = serde_json::from_str(raw).expect("parse");
        let value = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(value["tema"], "oscuro");
    }

    #[test]
    fn priority_and_category_parse_from_text() {
        assert_eq!("alta".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" Baja ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgente".parse::<Priority>().is_err());
        assert_eq!("solución".parse::<Category>(), Ok(Category::Solution));
        assert_eq!("solucion".parse::<Category>(), Ok(Category::Solution));
        assert_eq!(Category::Solution.as_str(), "Solución");
        assert!("misc".parse::<Category>().is_err());
    }

    #[test]
    fn lenient_date_parsing() {
        assert_eq!(parse_date("2024-03-05"), Some(day(2024, 3, 5)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("05/03/2024"), None);
        assert_eq!(parse_date("2024-13-40"), None);
        assert!(parse_timestamp("2024-03-05 10:00:00").is_some());
        assert_eq!(parse_timestamp("2024-03-05"), None);
    }
}
