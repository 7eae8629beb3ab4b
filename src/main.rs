use clap::Parser;
use colored::Colorize;
use eyre::Result;
use std::io::{BufRead, Write};
use tasklist::{Task, TaskId, TaskListStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Interactive in-memory task list - tasks live for the session only")]
#[command(version)]
struct Cli {
    /// Seed task(s) added before the prompt starts (repeatable)
    #[arg(short, long = "task")]
    tasks: Vec<String>,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut store = TaskListStore::new();
    for text in &cli.tasks {
        store.add_task(text);
    }

    println!("tasklist - type 'help' for commands, 'quit' to exit");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut last_rendered = u64::MAX;

    loop {
        // Re-render only when the store actually changed
        if store.revision() != last_rendered {
            render(&store);
            last_rendered = store.revision();
        }

        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let (command, rest) = match line.trim_end_matches('\n').split_once(' ') {
            Some((cmd, rest)) => (cmd, rest),
            None => (line.trim(), ""),
        };

        match command {
            "add" => {
                if store.add_task(rest).is_none() {
                    println!("nothing to add");
                }
            }
            "ls" | "list" => last_rendered = u64::MAX, // force re-render
            "search" => store.set_search_term(rest),
            "done" => {
                if let Some(id) = parse_id(rest)
                    && !store.toggle_complete(id)
                {
                    println!("no task {}", id);
                }
            }
            "rm" => {
                if let Some(id) = parse_id(rest)
                    && !store.delete_task(id)
                {
                    println!("no task {}", id);
                }
            }
            "edit" => {
                if let Some(id) = parse_id(rest)
                    && !store.begin_edit(id)
                {
                    println!("no task {}", id);
                }
            }
            "text" => store.set_editing_text(rest),
            "save" => {
                if let Some(id) = store.editing_id() {
                    if !store.save_edit(id) {
                        println!("empty draft, still editing task {}", id);
                    }
                } else {
                    println!("not editing");
                }
            }
            "cancel" => store.cancel_edit(),
            "dump" => println!("{}", serde_json::to_string_pretty(&store.snapshot())?),
            "help" => print_help(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command '{}', try 'help'", other),
        }
    }

    Ok(())
}

fn parse_id(arg: &str) -> Option<TaskId> {
    match arg.trim().parse() {
        Ok(n) => Some(TaskId(n)),
        Err(_) => {
            println!("expected a task id, got '{}'", arg.trim());
            None
        }
    }
}

fn render(store: &TaskListStore) {
    let filtered = store.filtered_view();
    if filtered.is_empty() {
        if store.search_term().is_empty() {
            println!("{}", "no tasks".dimmed());
        } else {
            println!("{}", format!("no tasks match '{}'", store.search_term()).dimmed());
        }
        return;
    }

    for task in filtered {
        println!("  {}", format_task(task, store.editing_id()));
    }
    if let Some(draft) = store.editing_text() {
        println!("  {} {}", "draft:".yellow(), draft);
    }
}

fn format_task(task: &Task, editing: Option<TaskId>) -> String {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    let line = format!("{} {} {}", task.id.to_string().cyan(), marker, task.text);
    if editing == Some(task.id) {
        format!("{} {}", line, "(editing)".yellow())
    } else if task.completed {
        line.dimmed().strikethrough().to_string()
    } else {
        line
    }
}

fn print_help() {
    println!(
        "\
commands:
  add <text>     add a task
  ls             list tasks (respects current search)
  search <term>  filter tasks by substring (empty term clears)
  done <id>      toggle completion
  rm <id>        delete a task
  edit <id>      start editing a task
  text <text>    replace the edit draft
  save           commit the draft
  cancel         discard the draft
  dump           print the store snapshot as JSON
  quit           exit (tasks are not saved)"
    );
}
