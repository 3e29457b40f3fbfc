/// Topics recognised by [`help_text`], in the order they are listed.
pub const HELP_TOPICS: [&str; 8] = ["assignment",
                                    "print",
                                    "input",
                                    "folder creation",
                                    "list folders",
                                    "open folder",
                                    "delete folder",
                                    "conditional"];

const SUMMARY: &str = "Available commands:
  - Assignment: var = expression
  - Print: print expression
  - Input: input variable_name
  - Folder Creation: folder create folder_name
  - List Folders: folder list
  - Open Folder: folder open folder_name
  - Delete Folder: folder delete folder_name
  - Conditional (if-else) Statement: if condition: body [else: else_body]";

const UNKNOWN: &str = "Unknown command. Type 'help' for a list of available commands.";

/// Returns the static documentation for `topic`.
///
/// With no topic the full command summary is returned. Topics are matched
/// case-insensitively; an unknown topic yields a single "unknown command"
/// line.
///
/// # Example
/// ```
/// use plex::interpreter::help::help_text;
///
/// assert!(help_text(None).starts_with("Available commands:"));
/// assert_eq!(help_text(Some("Print")), "Print: print expression\nExample: print x");
/// assert!(help_text(Some("loops")).starts_with("Unknown command."));
/// ```
#[must_use]
pub fn help_text(topic: Option<&str>) -> String {
    let Some(topic) = topic else {
        return SUMMARY.to_string();
    };

    let (usage, example) = match topic.trim().to_lowercase().as_str() {
        "assignment" => ("Assignment: var = expression", "x = 5 + 3"),
        "print" => ("Print: print expression", "print x"),
        "input" => ("Input: input variable_name", "input x"),
        "folder creation" => ("Folder Creation: folder create folder_name", "folder create documents"),
        "list folders" => ("List Folders: folder list", "folder list"),
        "open folder" => ("Open Folder: folder open folder_name", "folder open documents"),
        "delete folder" => ("Delete Folder: folder delete folder_name", "folder delete documents"),
        "conditional" => ("Conditional (if-else) Statement: if condition: body [else: else_body]",
                          "if x > 0: print x else: print 'Negative'"),
        _ => return UNKNOWN.to_string(),
    };

    format!("{usage}\nExample: {example}")
}
