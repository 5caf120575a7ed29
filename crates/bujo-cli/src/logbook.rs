use anyhow::Result;
use bujo_core::{Category, LogEntry};
use bujo_store::Journal;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
pub enum LogCommand {
    /// Add a log entry
    Add(AddArgs),
    /// List entries, newest first unless told otherwise
    List(ListArgs),
    /// Overwrite an entry's title, content, and category
    Edit(EditArgs),
    /// Remove an entry
    #[command(alias = "remove")]
    Rm(IndexArgs),
    /// Labels of pending tasks, usable with `log add --task`
    Tasks,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub title: String,
    #[arg(long)]
    pub content: String,
    /// General, Idea, Problema, Solución, Logro, or Recordatorio
    #[arg(long)]
    pub category: Option<Category>,
    /// Free-text reference to a related task
    #[arg(long)]
    pub task: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub category: Option<Category>,
    #[arg(long)]
    pub oldest_first: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub index: usize,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    pub index: usize,
}

pub fn handle(journal: &mut Journal, command: LogCommand) -> Result<()> {
    match command {
        LogCommand::Add(args) => add(journal, &args),
        LogCommand::List(args) => list(journal, &args),
        LogCommand::Edit(args) => edit(journal, &args),
        LogCommand::Rm(args) => remove(journal, &args),
        LogCommand::Tasks => tasks(journal),
    }
}

fn add(journal: &mut Journal, args: &AddArgs) -> Result<()> {
    if journal.add_log_entry(&args.title, &args.content, args.category, args.task.clone()) {
        println!("Log entry added.");
    } else {
        println!("Both a title and content are required.");
    }
    Ok(())
}

fn list(journal: &Journal, args: &ListArgs) -> Result<()> {
    let entries = journal
        .document()
        .log_entries_filtered(args.category, !args.oldest_first);
    if args.json {
        let items: Vec<&LogEntry> = entries.iter().map(|(_, entry)| *entry).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No log entries match.");
        return Ok(());
    }
    for (index, entry) in entries {
        println!(
            "[{index}] {} ({}, {})",
            entry.title, entry.timestamp, entry.category
        );
        if let Some(related) = &entry.related_task {
            println!("    Relacionada con: {related}");
        }
        for line in entry.content.lines() {
            println!("    {line}");
        }
        if let Some(edited) = &entry.edited_at {
            println!("    (editado: {edited})");
        }
    }
    Ok(())
}

fn edit(journal: &mut Journal, args: &EditArgs) -> Result<()> {
    let Some(existing) = journal.document().log.get(args.index) else {
        println!("No log entry at index {}.", args.index);
        return Ok(());
    };
    let title = args.title.clone().unwrap_or_else(|| existing.title.clone());
    let content = args
        .content
        .clone()
        .unwrap_or_else(|| existing.content.clone());
    let category = args.category.unwrap_or(existing.category);

    if journal.edit_log_entry(args.index, &title, &content, category) {
        println!("Updated log entry [{}].", args.index);
    } else {
        println!("No log entry at index {}.", args.index);
    }
    Ok(())
}

fn remove(journal: &mut Journal, args: &IndexArgs) -> Result<()> {
    if journal.delete_log_entry(args.index) {
        println!("Removed log entry [{}].", args.index);
    } else {
        println!("No log entry at index {}.", args.index);
    }
    Ok(())
}

fn tasks(journal: &Journal) -> Result<()> {
    let labels = journal.document().pending_task_labels();
    if labels.is_empty() {
        println!("No pending tasks.");
        return Ok(());
    }
    for label in labels {
        println!("{label}");
    }
    Ok(())
}
