//! Help system for DashUX commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => {
            if let Some(text) = command_help(t) {
                return text;
            }
            if let Some(text) = group_help(t) {
                return text;
            }
            format!("Unknown help topic: '{}'. Run 'dash help' for a list of commands.", t)
        }
    }
}


fn overview() -> String {
    "\
dash — DashUX command-line interface (dashboard wireframe editor)

Usage: dash [--spec <path>] <command> [args...]

Commands:
  status [--json]            Show document and session status
  help [topic]               Show help
  batch <file>               Run a JSON list of commands in one process

Tab commands:
  tab list                   List tabs with their grid dimensions
  tab switch <tab>           Make a tab active (clears selection)

Component commands:
  comp list                  List the active tab's components
  comp select <target>       Select a component (C2 or tab_1_comp_2)
  comp next                  Select the next component, wrapping
  comp move <target> <up|down|left|right>
                             Move one grid unit (edit session required)
  comp resize <target> <width|height> <grow|shrink>
                             Resize by one grid unit (edit session required)

Edit-session commands:
  edit open                  Open an edit session
  edit commit                Merge edits and print the layout patch
  edit rollback              Discard edits, restore the loaded document
  edit toggle <on|off>       Gesture-level session toggle

Run 'dash help <command>' for detailed help on a specific command."
        .into()
}


fn group_help(group: &str) -> Option<String> {
    let text = match group {
        "tab" => "\
Tab commands — navigate between dashboard tabs

  tab list
    List tab identifiers with columns, rows and component counts.

  tab switch <tab>
    Make <tab> (e.g. tab_2) active. Clears the component selection;
    an open edit session keeps its working copy across the switch.",

        "comp" => "\
Component commands — select, move and resize components

  comp list
    List the active tab's components with logical and pixel geometry.

  comp select <target>
    Select a component. Targets are C-notation (C2) or full keys
    (tab_1_comp_2).

  comp next
    Select the next component in document order, wrapping at the end.

  comp move <target> <up|down|left|right>
    Move by one grid unit. Rejected if any edge would leave the grid.

  comp resize <target> <width|height> <grow|shrink>
    Resize by one grid unit. Sizes never drop below 1.",

        "edit" => "\
Edit-session commands — stage, commit or discard layout changes

  edit open
    Snapshot the document and start staging changes.

  edit commit
    Merge the working copy, print the minimal layout patch
    (position/width/height of touched components only).

  edit rollback
    Discard all staged changes and restore the snapshot.

  edit toggle <on|off>
    The gesture-level toggle. Turning off with unsaved changes asks
    for an explicit commit or rollback first.",

        _ => return None,
    };
    Some(text.into())
}


fn command_help(command: &str) -> Option<String> {
    let text = match command {
        "status" => "dash status — show document and session status\n\nUsage: dash status [--json]",
        "help" => "dash help — show help\n\nUsage: dash help [topic]",
        "batch" => "dash batch — run a JSON array of commands\n\nUsage: dash batch <file>",
        "tab.list" => "dash tab list — list tabs\n\nUsage: dash tab list",
        "tab.switch" => "dash tab switch — make a tab active\n\nUsage: dash tab switch <tab>",
        "comp.list" => "dash comp list — list the active tab's components\n\nUsage: dash comp list",
        "comp.select" => "dash comp select — select a component\n\nUsage: dash comp select <target>",
        "comp.next" => "dash comp next — cyclic next selection\n\nUsage: dash comp next",
        "comp.move" => "dash comp move — move a component one unit\n\nUsage: dash comp move <target> <up|down|left|right>",
        "comp.resize" => "dash comp resize — resize a component one unit\n\nUsage: dash comp resize <target> <width|height> <grow|shrink>",
        "edit.open" => "dash edit open — open an edit session\n\nUsage: dash edit open",
        "edit.commit" => "dash edit commit — commit staged edits\n\nUsage: dash edit commit",
        "edit.rollback" => "dash edit rollback — discard staged edits\n\nUsage: dash edit rollback",
        "edit.toggle" => "dash edit toggle — gesture-level session toggle\n\nUsage: dash edit toggle <on|off>",
        _ => return None,
    };
    Some(text.into())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_contains_groups() {
        let text = help_text(None);
        assert!(text.contains("Tab commands:"));
        assert!(text.contains("Component commands:"));
        assert!(text.contains("Edit-session commands:"));
    }

    #[test]
    fn group_help_comp() {
        let text = help_text(Some("comp"));
        assert!(text.contains("comp move"));
        assert!(text.contains("comp resize"));
        assert!(text.contains("comp next"));
    }

    #[test]
    fn command_help_comp_move() {
        let text = help_text(Some("comp.move"));
        assert!(text.contains("Usage:"));
        assert!(text.contains("up|down|left|right"));
    }

    #[test]
    fn unknown_topic() {
        let text = help_text(Some("bogus"));
        assert!(text.contains("Unknown help topic"));
    }
}
