use anyhow::Result;
use bujo_core::Priority;
use bujo_store::Journal;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
pub enum ProjectCommand {
    /// Create a project and make it the current one
    Create(NameArgs),
    /// List projects with their progress
    List(ListArgs),
    /// Show one project in detail
    Show(ShowArgs),
    /// Select the current project
    Use(NameArgs),
    /// Delete a project and its tasks
    #[command(alias = "remove")]
    Rm(NameArgs),
    /// Set or clear the project deadline
    Deadline(DeadlineArgs),
    /// Add a task to a project
    Add(AddArgs),
    /// Flip a project task between pending and completed
    #[command(alias = "done")]
    Toggle(TaskIndexArgs),
    /// Change a task's priority
    Priority(PriorityArgs),
    /// Remove a task from a project
    RmTask(TaskIndexArgs),
}

#[derive(Args, Debug)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Defaults to the current project
    pub name: Option<String>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeadlineArgs {
    /// New deadline (YYYY-MM-DD)
    #[arg(conflicts_with = "clear")]
    pub date: Option<NaiveDate>,
    /// Remove the deadline instead
    #[arg(long)]
    pub clear: bool,
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub description: String,
    /// Task deadline (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    /// Baja, Media, or Alta; defaults to the configured priority
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Args, Debug)]
pub struct TaskIndexArgs {
    pub index: usize,
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Args, Debug)]
pub struct PriorityArgs {
    pub index: usize,
    pub priority: Priority,
    #[arg(long)]
    pub project: Option<String>,
}

pub fn handle(journal: &mut Journal, command: ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::Create(args) => create(journal, &args),
        ProjectCommand::List(args) => list(journal, &args),
        ProjectCommand::Show(args) => show(journal, &args),
        ProjectCommand::Use(args) => select(journal, &args),
        ProjectCommand::Rm(args) => remove(journal, &args),
        ProjectCommand::Deadline(args) => deadline(journal, &args),
        ProjectCommand::Add(args) => add_task(journal, &args),
        ProjectCommand::Toggle(args) => toggle_task(journal, &args),
        ProjectCommand::Priority(args) => set_priority(journal, &args),
        ProjectCommand::RmTask(args) => remove_task(journal, &args),
    }
}

fn resolve_project(journal: &Journal, flag: Option<&str>) -> Option<String> {
    let name = journal.resolve_project(flag);
    if name.is_none() {
        println!("No project selected. Pass --project or run `bujo project use <name>`.");
    }
    name
}

fn create(journal: &mut Journal, args: &NameArgs) -> Result<()> {
    if journal.create_project(&args.name) {
        println!("Created project '{}' and selected it.", args.name.trim());
    } else {
        println!("A project needs a unique, non-empty name.");
    }
    Ok(())
}

fn list(journal: &Journal, args: &ListArgs) -> Result<()> {
    let projects = &journal.document().projects;
    if args.json {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }
    if projects.is_empty() {
        println!("No projects yet.");
        return Ok(());
    }
    let current = journal.current_project();
    for (name, project) in projects {
        let marker = if current == Some(name.as_str()) { "*" } else { " " };
        println!(
            "{marker} {name} ({:.1}%, {} tasks)",
            project.progress,
            project.tasks.len()
        );
    }
    Ok(())
}

fn show(journal: &Journal, args: &ShowArgs) -> Result<()> {
    let Some(name) = resolve_project(journal, args.name.as_deref()) else {
        return Ok(());
    };
    let Some(project) = journal.document().projects.get(&name) else {
        println!("No project named '{name}'.");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }

    println!("{name} ({:.1}% complete)", project.progress);
    let deadline = if project.deadline.is_empty() {
        "none"
    } else {
        project.deadline.as_str()
    };
    println!("Created: {}  Deadline: {deadline}", project.created_on);
    if project.tasks.is_empty() {
        println!("No tasks in this project yet.");
        return Ok(());
    }
    for (index, task) in project.tasks.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        let mut line = format!("[{index}] [{mark}] {} ({})", task.description, task.priority);
        if !task.deadline.is_empty() {
            line.push_str(&format!(" [límite {}]", task.deadline));
        }
        println!("{line}");
    }
    Ok(())
}

fn select(journal: &mut Journal, args: &NameArgs) -> Result<()> {
    if journal.select_project(&args.name) {
        println!("Now using project '{}'.", args.name.trim());
    } else {
        println!("No project named '{}'.", args.name.trim());
    }
    Ok(())
}

fn remove(journal: &mut Journal, args: &NameArgs) -> Result<()> {
    if journal.delete_project(&args.name) {
        println!("Deleted project '{}'.", args.name.trim());
    } else {
        println!("No project named '{}'.", args.name.trim());
    }
    Ok(())
}

fn deadline(journal: &mut Journal, args: &DeadlineArgs) -> Result<()> {
    let Some(name) = resolve_project(journal, args.project.as_deref()) else {
        return Ok(());
    };
    if args.date.is_none() && !args.clear {
        println!("Pass a date or --clear.");
        return Ok(());
    }
    if journal.set_project_deadline(&name, args.date) {
        match args.date {
            Some(date) => println!("Deadline for '{name}' set to {date}."),
            None => println!("Deadline for '{name}' cleared."),
        }
    } else {
        println!("No project named '{name}'.");
    }
    Ok(())
}

fn add_task(journal: &mut Journal, args: &AddArgs) -> Result<()> {
    let Some(name) = resolve_project(journal, args.project.as_deref()) else {
        return Ok(());
    };
    if journal.add_project_task(&name, &args.description, args.deadline, args.priority) {
        println!("Added task to '{name}'.");
    } else {
        println!("Could not add the task: check the project name and description.");
    }
    Ok(())
}

fn toggle_task(journal: &mut Journal, args: &TaskIndexArgs) -> Result<()> {
    let Some(name) = resolve_project(journal, args.project.as_deref()) else {
        return Ok(());
    };
    if journal.toggle_project_task(&name, args.index) {
        let project = &journal.document().projects[&name];
        let task = &project.tasks[args.index];
        let state = if task.completed { "completed" } else { "pending" };
        println!(
            "[{}] {} is now {state}; '{name}' at {:.1}%.",
            args.index, task.description, project.progress
        );
    } else {
        println!("No task at index {} in '{name}'.", args.index);
    }
    Ok(())
}

fn set_priority(journal: &mut Journal, args: &PriorityArgs) -> Result<()> {
    let Some(name) = resolve_project(journal, args.project.as_deref()) else {
        return Ok(());
    };
    if journal.set_task_priority(&name, args.index, args.priority) {
        println!("Task [{}] in '{name}' is now {}.", args.index, args.priority);
    } else {
        println!("No task at index {} in '{name}'.", args.index);
    }
    Ok(())
}

fn remove_task(journal: &mut Journal, args: &TaskIndexArgs) -> Result<()> {
    let Some(name) = resolve_project(journal, args.project.as_deref()) else {
        return Ok(());
    };
    if journal.delete_project_task(&name, args.index) {
        let progress = journal.document().projects[&name].progress;
        println!("Removed task [{}]; '{name}' at {progress:.1}%.", args.index);
    } else {
        println!("No task at index {} in '{name}'.", args.index);
    }
    Ok(())
}
