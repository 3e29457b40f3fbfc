use std::fs;

use plex::{
    help_text,
    interpreter::{
        io::{NoInput, ScriptedInput},
        session::Session,
    },
    run,
};
use walkdir::WalkDir;

/// One runnable example from the book.
struct Example {
    code:   String,
    input:  Vec<String>,
    output: Vec<String>,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let program = example.code.lines().collect::<Vec<_>>().join(",");
            let mut input = ScriptedInput::new(example.input.clone());
            let output = Session::new().run(&program, &mut input);

            assert_eq!(output,
                       example.output,
                       "Example {} in {:?} produced unexpected output:\n{}",
                       i + 1,
                       path,
                       example.code);
        }
    }

    assert!(count > 0, "No plex examples found in book/src");
}

/// Collects fenced blocks as `(language, body)` pairs.
fn extract_blocks(content: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        match current.take() {
            None => {
                if let Some(lang) = trimmed.strip_prefix("```") {
                    current = Some((lang.trim().to_string(), String::new()));
                }
            },
            Some((lang, body)) if trimmed.starts_with("```") => blocks.push((lang, body)),
            Some((lang, mut body)) => {
                body.push_str(line);
                body.push('\n');
                current = Some((lang, body));
            },
        }
    }

    blocks
}

/// Pairs every `plex` block with the optional `input` block and the
/// mandatory `output` block that follow it.
fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut blocks = extract_blocks(content).into_iter().peekable();

    while let Some((lang, code)) = blocks.next() {
        if lang != "plex" {
            continue;
        }

        let mut input = Vec::new();
        if blocks.peek().is_some_and(|(lang, _)| lang == "input") {
            let (_, body) = blocks.next().unwrap();
            input = body.lines().map(str::to_string).collect();
        }

        let (lang, body) = blocks.next().expect("plex block without output block");
        assert_eq!(lang, "output", "plex block must be followed by an output block");

        examples.push(Example { code,
                                input,
                                output: body.lines().map(str::to_string).collect() });
    }

    examples
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(run(src), expected, "program: {src}");
}

#[test]
fn assignment_then_print_emits_the_value() {
    assert_output("n = 1 + 2,print n", &["3"]);
    assert_output("n = 'text',print n", &["text"]);
    assert_output("n = 2.5 * 2,print n", &["5.0"]);
    assert_output("n = 3 > 2,print n", &["True"]);
    assert_output("total_2 = 7,print total_2", &["7"]);
}

#[test]
fn operator_precedence() {
    assert_output("print 2+2*3", &["8"]);
    assert_output("print 2*3**2", &["18"]);
    assert_output("print 1 + 2 < 4 and 2 > 1", &["True"]);
    assert_output("print not 0 or 0", &["True"]);
    assert_output("print 10 - 4 - 3", &["3"]);
}

#[test]
fn division_by_zero_is_reported_alone() {
    assert_output("print 10/0", &["Error: Division by zero"]);
    assert_output("print 10//0", &["Error: Division by zero"]);
    assert_output("print 1.5 % 0.0", &["Error: Division by zero"]);
    assert_output("print 0 ** -1", &["Error: Division by zero"]);
}

#[test]
fn failing_statement_does_not_stop_the_program() {
    assert_output("x = 5,y = +,print x",
                  &["Error: Invalid expression: unexpected token '+' at column 0", "5"]);
    assert_output("print 1,print (2,print 3",
                  &["1",
                    "Error: Invalid expression: expected closing parenthesis ')' at column 0",
                    "3"]);
}

#[test]
fn empty_segments_are_skipped() {
    assert_output(",, print 1 ,,  , print 2,", &["1", "2"]);
    assert_output("", &[]);
}

#[test]
fn variable_names_do_not_collide_by_prefix() {
    assert_output("x = 1,x2 = 20,print x2 + x", &["21"]);
    assert_output("o = 0,print 1 or o", &["True"]);
}

#[test]
fn integer_overflow_is_an_invalid_expression() {
    assert_output("print 9223372036854775807 + 1",
                  &["Error: Invalid expression: integer overflow"]);
    assert_output("print 99999999999999999999",
                  &["Error: Invalid expression: literal at column 0 is too large"]);
}

#[test]
fn malformed_statements() {
    assert_output("hello", &["Error: Invalid statement: hello"]);
    assert_output("_x = 1", &["Error: Invalid identifier '_x': names must start with a letter and contain only letters, digits and underscores"]);
    assert_output("input 9x", &["Error: Invalid identifier '9x': names must start with a letter and contain only letters, digits and underscores"]);
    assert_output("folder create a b", &["Error: Invalid folder creation statement"]);
    assert_output("folder open", &["Error: Invalid open folder statement"]);
    assert_output("if 1", &["Error: Invalid if statement, expected 'if condition: body'"]);
}

#[test]
fn conditionals_choose_a_branch() {
    assert_output(r#"if 1>0: print "yes" else: print "no""#, &["yes"]);
    assert_output(r#"if 0>1: print "yes" else: print "no""#, &["no"]);
    assert_output(r#"if 0>1: print "yes""#, &[]);
}

#[test]
fn conditional_inline_else_fragment() {
    assert_output(r#"if 0 else print "fallback": print "body""#, &["fallback"]);
    assert_output(r#"if 1 else print "fallback": print "body""#, &["body"]);
    // A body-level else wins over the inline fragment.
    assert_output(r#"if 0 else print "inline": print "body" else: print "body else""#,
                  &["body else"]);
}

#[test]
fn conditional_errors_in_branches_are_isolated() {
    assert_output("if 1: print 1/0,print 2", &["Error: Division by zero", "2"]);
    assert_output("if missing: print 1", &["Error: Invalid expression: name 'missing' is not defined"]);
}

#[test]
fn help_text_is_idempotent() {
    assert_eq!(help_text(None), help_text(None));
    assert_eq!(help_text(Some("conditional")), help_text(Some("conditional")));
}

#[test]
fn help_text_topics() {
    let summary = help_text(None);
    assert!(summary.starts_with("Available commands:"));
    assert_eq!(summary.lines().count(), 9);

    for topic in plex::interpreter::help::HELP_TOPICS {
        let text = help_text(Some(topic));
        assert!(text.contains("Example: "), "topic {topic} has no example");
    }

    assert_eq!(help_text(Some("Open Folder")),
               "Open Folder: folder open folder_name\nExample: folder open documents");
    assert_eq!(help_text(Some("teleport")),
               "Unknown command. Type 'help' for a list of available commands.");
}

#[test]
fn run_without_input_reports_missing_input() {
    assert_output("input x,print 1", &["Error: No input available for 'x'", "1"]);
    let mut session = Session::new();
    assert_eq!(session.run("input x", &mut NoInput),
               ["Error: No input available for 'x'"]);
    assert!(session.state().variables.get("x").is_none());
}

#[test]
fn deeply_nested_expressions_are_rejected() {
    let parens = format!("print {}1{},print 2", "(".repeat(10_000), ")".repeat(10_000));
    let output = run(&parens);
    assert_eq!(output.len(), 2);
    assert!(output[0].starts_with("Error: Invalid expression: expression is nested too deeply at column"),
            "got {}",
            output[0]);
    assert_eq!(output[1], "2");

    let negations = format!("print {}1,print 3", "-".repeat(200_000));
    let output = run(&negations);
    assert!(output[0].starts_with("Error: Invalid expression: expression is nested too deeply"));
    assert_eq!(output[1], "3");

    let sum = format!("print 1{},print 4", "+1".repeat(100_000));
    let output = run(&sum);
    assert!(output[0].starts_with("Error: Invalid expression: expression is nested too deeply"));
    assert_eq!(output[1], "4");
}

#[test]
fn moderately_nested_expressions_still_work() {
    assert_output(&format!("print {}7{}", "(".repeat(100), ")".repeat(100)), &["7"]);
    assert_output(&format!("print 0{}", "+1".repeat(100)), &["100"]);
    assert_output("print - - - 4", &["-4"]);
}

#[test]
fn large_integers_promote_to_reals() {
    assert_output("print 10000000000000000 / 4", &["2500000000000000.0"]);
    assert_output("x = 2**53 + 1,print x * 1.0", &["9007199254740992.0"]);
    assert_output("print 2**60 > 0.5", &["True"]);
    assert_output("print 2**53 + 1", &["9007199254740993"]);
}

#[test]
fn string_results_are_capped() {
    assert_output("print 'a' * 2000000",
                  &["Error: Invalid expression: string result longer than 1048576 bytes"]);
    assert_output("s = 'ab' * 524288,print s + 'c'",
                  &["Error: Invalid expression: string result longer than 1048576 bytes"]);
    assert_output("print 'ab' * -3 == ''", &["True"]);
}

#[test]
fn assignment_inside_a_conditional_body_is_an_assignment() {
    assert_output("x = 1,if x > 0: y = 1",
                  &["Error: Invalid identifier 'if x > 0: y': names must start with a letter and contain only letters, digits and underscores"]);
}
