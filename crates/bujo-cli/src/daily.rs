use anyhow::Result;
use bujo_store::Journal;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
pub enum DailyCommand {
    /// Add a daily task
    Add(AddArgs),
    /// List daily tasks with their positional indices
    List(ListArgs),
    /// Flip a task between pending and completed
    #[command(alias = "done")]
    Toggle(IndexArgs),
    /// Remove a task
    #[command(alias = "remove")]
    Rm(IndexArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub description: String,
    /// Task date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    pub index: usize,
}

pub fn handle(journal: &mut Journal, command: DailyCommand) -> Result<()> {
    match command {
        DailyCommand::Add(args) => add(journal, &args),
        DailyCommand::List(args) => list(journal, &args),
        DailyCommand::Toggle(args) => toggle(journal, &args),
        DailyCommand::Rm(args) => remove(journal, &args),
    }
}

fn add(journal: &mut Journal, args: &AddArgs) -> Result<()> {
    if journal.add_daily_task(&args.description, args.date) {
        println!("Added daily task.");
    } else {
        println!("The task description cannot be empty.");
    }
    Ok(())
}

fn list(journal: &Journal, args: &ListArgs) -> Result<()> {
    let tasks = &journal.document().daily;
    if args.json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }
    if tasks.is_empty() {
        println!("No daily tasks yet.");
        return Ok(());
    }
    for (index, task) in tasks.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        println!("[{index}] [{mark}] {} ({})", task.description, task.date);
    }
    Ok(())
}

fn toggle(journal: &mut Journal, args: &IndexArgs) -> Result<()> {
    if journal.toggle_daily_task(args.index) {
        let task = &journal.document().daily[args.index];
        let state = if task.completed { "completed" } else { "pending" };
        println!("[{}] {} is now {state}.", args.index, task.description);
    } else {
        println!("No daily task at index {}.", args.index);
    }
    Ok(())
}

fn remove(journal: &mut Journal, args: &IndexArgs) -> Result<()> {
    if journal.delete_daily_task(args.index) {
        println!("Removed daily task [{}].", args.index);
    } else {
        println!("No daily task at index {}.", args.index);
    }
    Ok(())
}
