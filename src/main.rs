mod app;
mod domain;
mod logging;
mod persistence;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use domain::{SortMode, TaskStatus};
use persistence::{get_data_dir, init_local_dir};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Projects, tasks and colour themes stored as plain JSON files", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .checklist directory, then ~/.checklist
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .checklist directory in the current directory
    Init,
    #[command(flatten)]
    Data(DataCommand),
}

/// Commands that work on an existing data directory
#[derive(Subcommand)]
enum DataCommand {
    /// List projects, favourites first
    Projects,
    /// Create a project and make it current
    New {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Delete a project and all of its tasks
    Delete {
        project: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Mark a project as favourite
    Favourite { project: String },
    /// Remove the favourite mark from a project
    Unfavourite { project: String },
    /// Make a project current
    Open { project: String },
    /// Show the tasks of a project
    Tasks {
        /// status, alphanumeric or oldest; remembered for next time
        #[arg(short, long)]
        sort: Option<SortMode>,
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Add a pending task
    Add {
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Replace the text of a task (by list number or id prefix)
    Edit {
        task: String,
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Set a task to Pending, WIP or Done
    Status {
        task: String,
        status: TaskStatus,
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Delete a task
    Remove {
        task: String,
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Sort tasks alphabetically and save that as their manual order
    SortText {
        #[arg(short, long)]
        project: Option<String>,
    },
    /// List themes
    Themes,
    /// Show, apply or save a theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
    /// Print the font colour that reads best on a background colour
    Contrast { color: String },
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Show the colours of a theme (the active one by default)
    Show { name: Option<String> },
    /// Apply a theme
    Use { name: String },
    /// Save a theme from a base theme plus PARAM=#hex overrides
    Save {
        name: String,
        /// Theme to start from. Defaults to the active theme
        #[arg(long)]
        from: Option<String>,
        /// e.g. PendingBackground=#e53935
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized checklist directory: {}", data_dir.display());
            println!();
            println!("Checklist will now use this local directory for projects and themes.");
            return Ok(());
        }
        Some(Commands::Data(command)) => Some(command),
        None => None,
    };

    let root = get_data_dir(cli.dir.as_deref())?;
    let _logging = match logging::init_logging(&root) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let mut app = App::open(&root)?;
    run(&mut app, command)
}

fn run(app: &mut App, command: Option<DataCommand>) -> Result<()> {
    match command {
        None => {
            if app.metadata.current_project.is_some() {
                show_tasks(app, None, None)
            } else {
                show_projects(app)
            }
        }
        Some(DataCommand::Projects) => show_projects(app),
        Some(DataCommand::New { name }) => {
            let project = app.create_project(&name.join(" "))?;
            println!("Created project '{}' ({})", project.name, project.id);
            Ok(())
        }
        Some(DataCommand::Delete { project, yes }) => {
            let project = app.find_project(&project)?;
            let question = format!(
                "Are you sure you want to delete project '{}'? This cannot be undone.",
                project.name
            );
            if !yes && !confirm(&question)? {
                println!("Cancelled");
                return Ok(());
            }

            let selected = app.delete_project(&project.id)?;
            println!("Deleted project '{}'", project.name);
            match selected.and_then(|id| app.projects.get(&id).ok()) {
                Some(current) => println!("Current project: {}", current.name),
                None => println!("No project selected"),
            }
            Ok(())
        }
        Some(DataCommand::Favourite { project }) => set_favourite(app, &project, true),
        Some(DataCommand::Unfavourite { project }) => set_favourite(app, &project, false),
        Some(DataCommand::Open { project }) => {
            let project = app.find_project(&project)?;
            app.open_project(&project.id);
            show_tasks(app, Some(project.id.as_str()), None)
        }
        Some(DataCommand::Tasks { sort, project }) => show_tasks(app, project.as_deref(), sort),
        Some(DataCommand::Add { text, project }) => {
            let project = app.target_project(project.as_deref())?;
            match app.tasks.add(&project.id, &text.join(" "))? {
                Some(task) => println!("Added task to '{}': {}", project.name, task.text),
                None => println!("Nothing to add"),
            }
            Ok(())
        }
        Some(DataCommand::Edit { task, text, project }) => {
            let project = app.target_project(project.as_deref())?;
            let task = app.find_task(&project.id, &task)?;
            match app.tasks.edit(&project.id, &task.id, &text.join(" "))? {
                Some(task) => println!("Updated task: {}", task.text),
                None => println!("Task text unchanged"),
            }
            Ok(())
        }
        Some(DataCommand::Status { task, status, project }) => {
            let project = app.target_project(project.as_deref())?;
            let task = app.set_task_status(&project.id, &task, status)?;
            println!("{} -> {}", task.text, task.status);
            Ok(())
        }
        Some(DataCommand::Remove { task, project }) => {
            let project = app.target_project(project.as_deref())?;
            let task = app.find_task(&project.id, &task)?;
            app.tasks.delete(&project.id, &task.id)?;
            println!("Deleted task: {}", task.text);
            Ok(())
        }
        Some(DataCommand::SortText { project }) => {
            let project = app.target_project(project.as_deref())?;
            let tasks = app.tasks.sort_by_text_and_persist(&project.id)?;
            let lines = ui::render_task_list(
                &project,
                &tasks,
                &app.active_colors(),
                SortMode::Alphanumeric,
                ui::terminal_width(),
            );
            ui::print_lines(&lines);
            Ok(())
        }
        Some(DataCommand::Themes) => {
            ui::print_lines(&ui::render_theme_list(&app.theme_catalog()));
            Ok(())
        }
        Some(DataCommand::Theme { action }) => run_theme(app, action),
        Some(DataCommand::Contrast { color }) => {
            println!("{}", ui::render_contrast(&color));
            Ok(())
        }
    }
}

fn run_theme(app: &App, action: ThemeCommand) -> Result<()> {
    match action {
        ThemeCommand::Show { name } => {
            let catalog = app.theme_catalog();
            let name = name.unwrap_or_else(|| catalog.current_name());
            ui::print_lines(&ui::render_theme(&name, &catalog.resolve(&name)));
        }
        ThemeCommand::Use { name } => {
            let colors = app.apply_theme(&name)?;
            ui::print_lines(&ui::render_theme(&name, &colors));
        }
        ThemeCommand::Save { name, from, params } => {
            let colors = app.save_theme(&name, from.as_deref(), &params)?;
            println!("Saved and applied theme '{}'", name.trim());
            ui::print_lines(&ui::render_theme(name.trim(), &colors));
        }
    }
    Ok(())
}

fn show_projects(app: &App) -> Result<()> {
    let projects = app.project_list()?;
    let lines = ui::render_project_list(&projects, app.metadata.current_project.as_deref());
    ui::print_lines(&lines);
    Ok(())
}

fn show_tasks(app: &mut App, project: Option<&str>, sort: Option<SortMode>) -> Result<()> {
    let project = app.target_project(project)?;
    if let Some(mode) = sort {
        app.set_sort_mode(mode);
    }

    let tasks = app.sorted_tasks(&project.id, None)?;
    let lines = ui::render_task_list(
        &project,
        &tasks,
        &app.active_colors(),
        app.metadata.sort_mode,
        ui::terminal_width(),
    );
    ui::print_lines(&lines);
    Ok(())
}

fn set_favourite(app: &App, reference: &str, favourite: bool) -> Result<()> {
    let project = app.find_project(reference)?;
    let project = app.projects.set_favourite(&project.id, favourite)?;
    if project.favourite {
        println!("'{}' is now a favourite", project.name);
    } else {
        println!("'{}' is no longer a favourite", project.name);
    }
    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes means no
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_parses_apart_from_data_commands() {
        let cli = Cli::try_parse_from(["checklist", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));

        let cli = Cli::try_parse_from(["checklist", "--dir", "/tmp/x", "tasks", "--sort", "oldest"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Some(Commands::Data(DataCommand::Tasks {
                sort: Some(SortMode::Oldest),
                project: None
            }))
        ));

        let cli = Cli::try_parse_from(["checklist"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_status_argument_is_parsed() {
        let cli = Cli::try_parse_from(["checklist", "status", "#2", "wip"]).unwrap();
        match cli.command {
            Some(Commands::Data(DataCommand::Status { task, status, project })) => {
                assert_eq!(task, "#2");
                assert_eq!(status, TaskStatus::Wip);
                assert!(project.is_none());
            }
            _ => panic!("expected status command"),
        }
    }
}
