//! DashUX CLI — the command-line entry point for the wireframe editor.
//!
//! One-shot commands run against a `Sys` built from the spec document named
//! by `--spec` or `DASH_SPEC`. `dash batch <file>` executes a JSON array of
//! commands in a single process, which is how the edit-session lifecycle is
//! driven from the command line. The CLI's clipboard sink is stdout.

use std::path::Path;
use std::process;

use dashux_core::command::Command;
use dashux_core::data::spec_doc;
use dashux_core::layout::model::Dimension;
use dashux_core::sys::Sys;
use dashux_core::types::config::DashSettings;
use dashux_core::types::response::{Action, Response};
use dashux_core::types::spec::SpecDoc;


enum CliCommand {
    Run(Command),
    Batch(String),
}


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();
    let spec_flag = take_flag(&mut arg_refs, "--spec");

    let cli = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("dash: {}", e);
            process::exit(1);
        }
    };

    let spec_path = spec_flag.or_else(|| std::env::var("DASH_SPEC").ok());
    let doc = match &spec_path {
        Some(path) => match spec_doc::from_file(Path::new(path)) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("dash: failed to load '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            // Only help works without a document.
            if !matches!(cli, CliCommand::Run(Command::Help { .. })) {
                eprintln!("dash: no spec document; pass --spec <path> or set DASH_SPEC");
                process::exit(1);
            }
            SpecDoc::default()
        }
    };

    let settings = DashSettings {
        spec_path: spec_path.unwrap_or_default(),
        ..DashSettings::default()
    };
    let mut sys = Sys::new(doc, settings);

    let ok = match cli {
        CliCommand::Run(cmd) => execute_and_print(&mut sys, cmd),
        CliCommand::Batch(path) => run_batch(&mut sys, &path),
    };
    if !ok {
        process::exit(1);
    }
}


/// Execute one command, print its response, and carry out queued actions.
/// Returns false if anything errored.
fn execute_and_print(sys: &mut Sys, cmd: Command) -> bool {
    let mut ok = true;
    match sys.execute(cmd) {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("dash error: {}", message);
            ok = false;
        }
    }

    for action in sys.drain_actions() {
        match action {
            Action::CopyToClipboard { .. } => {
                // The payload already went to stdout, which is the CLI's
                // clipboard sink; acknowledge so the session can close.
                if let Response::Error { message } = sys.execute(Command::EditAck { ok: true }) {
                    eprintln!("dash error: {}", message);
                    ok = false;
                }
                for follow_up in sys.drain_actions() {
                    if let Action::ShowToast { message } = follow_up {
                        eprintln!("dash: {}", message);
                    }
                }
            }
            Action::ShowToast { message } => eprintln!("dash: {}", message),
            Action::ConfirmUnsaved => eprintln!(
                "dash: unsaved changes — run 'dash edit commit' or 'dash edit rollback'"
            ),
        }
    }
    ok
}


/// Run a JSON array of commands from a file in one process.
fn run_batch(sys: &mut Sys, path: &str) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("dash: failed to read '{}': {}", path, e);
            return false;
        }
    };
    let commands: Vec<Command> = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("dash: failed to parse '{}': {}", path, e);
            return false;
        }
    };
    let mut ok = true;
    for cmd in commands {
        if !execute_and_print(sys, cmd) {
            ok = false;
        }
    }
    ok
}


fn parse_args(args: &[&str]) -> Result<CliCommand, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'dash help' for usage.".into());
    }

    let cmd = match args[0] {
        "status" => Command::Status {
            format: args.get(1).and_then(|a| {
                if *a == "--json" { Some("json".into()) } else { None }
            }),
        },
        "help" => Command::Help {
            topic: args.get(1).map(|s| s.to_string()),
        },
        "batch" => {
            if args.len() < 2 {
                return Err("Usage: dash batch <file>".into());
            }
            return Ok(CliCommand::Batch(args[1].into()));
        }
        "tab" => parse_tab(args)?,
        "comp" => parse_comp(args)?,
        "edit" => parse_edit(args)?,
        _ => {
            return Err(format!(
                "Unknown command: '{}'. Run 'dash help' for usage.",
                args[0]
            ))
        }
    };
    Ok(CliCommand::Run(cmd))
}


fn parse_tab(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: dash tab <list|switch> ...".into());
    }
    match args[1] {
        "list" => Ok(Command::TabList),
        "switch" => {
            if args.len() < 3 {
                return Err("Usage: dash tab switch <tab>".into());
            }
            Ok(Command::TabSwitch {
                tab: args[2].into(),
            })
        }
        _ => Err(format!("Unknown tab subcommand: '{}'", args[1])),
    }
}


fn parse_comp(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: dash comp <subcommand> ...".into());
    }
    match args[1] {
        "list" => Ok(Command::ComponentList),
        "next" => Ok(Command::SelectNext),
        "select" => {
            if args.len() < 3 {
                return Err("Usage: dash comp select <target>".into());
            }
            Ok(Command::Select {
                target: args[2].into(),
            })
        }
        "move" => {
            if args.len() < 4 {
                return Err("Usage: dash comp move <target> <up|down|left|right>".into());
            }
            let (rows, cols) = parse_direction(args[3])?;
            Ok(Command::Move {
                target: Some(args[2].into()),
                rows,
                cols,
            })
        }
        "resize" => {
            if args.len() < 5 {
                return Err(
                    "Usage: dash comp resize <target> <width|height> <grow|shrink>".into(),
                );
            }
            let dimension = match args[3] {
                "width" => Dimension::Width,
                "height" => Dimension::Height,
                other => return Err(format!("Unknown dimension: '{}'", other)),
            };
            let delta = match args[4] {
                "grow" => 1,
                "shrink" => -1,
                other => return Err(format!("Expected grow or shrink, got '{}'", other)),
            };
            Ok(Command::Resize {
                target: Some(args[2].into()),
                dimension,
                delta,
            })
        }
        _ => Err(format!("Unknown comp subcommand: '{}'", args[1])),
    }
}


fn parse_edit(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: dash edit <open|commit|rollback|toggle> ...".into());
    }
    match args[1] {
        "open" => Ok(Command::EditOpen),
        "commit" => Ok(Command::EditCommit),
        "rollback" => Ok(Command::EditRollback),
        "toggle" => match args.get(2) {
            Some(&"on") => Ok(Command::EditToggle { enabled: true }),
            Some(&"off") => Ok(Command::EditToggle { enabled: false }),
            _ => Err("Usage: dash edit toggle <on|off>".into()),
        },
        _ => Err(format!("Unknown edit subcommand: '{}'", args[1])),
    }
}


fn parse_direction(dir: &str) -> Result<(i32, i32), String> {
    match dir {
        "up" => Ok((-1, 0)),
        "down" => Ok((1, 0)),
        "left" => Ok((0, -1)),
        "right" => Ok((0, 1)),
        other => Err(format!("Unknown direction: '{}'", other)),
    }
}


fn take_flag(args: &mut Vec<&str>, flag: &str) -> Option<String> {
    let index = args.iter().position(|a| *a == flag)?;
    if index + 1 >= args.len() {
        args.remove(index);
        return None;
    }
    let value = args[index + 1].to_string();
    args.drain(index..=index + 1);
    Some(value)
}
