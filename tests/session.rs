use plex::{
    interpreter::{
        io::{NoInput, ScriptedInput},
        session::Session,
        state::Folder,
    },
    run,
};

fn run_with_input(src: &str, lines: &[&str]) -> Vec<String> {
    let mut input = ScriptedInput::new(lines.iter().copied());
    Session::new().run(src, &mut input)
}

#[test]
fn folder_round_trip_matches_direct_run() {
    let output = run_with_input("folder create f,folder open f", &["x = 1", "print x", "."]);

    assert_eq!(output[0], "Folder 'f' created successfully with content: x = 1, print x");
    assert_eq!(output[1..], run("x = 1,print x"));
}

#[test]
fn folder_delete_of_unknown_folder() {
    assert_eq!(run("folder delete ghost"), ["Folder 'ghost' does not exist."]);
    assert_eq!(run("folder open ghost"), ["Folder 'ghost' does not exist."]);
}

#[test]
fn folder_create_overwrites_in_place() {
    let output = run_with_input("folder create a,folder create b,folder create a,folder list",
                                &["print 1", ".", "print 2", ".", "print 3", "."]);

    assert_eq!(output[3..], ["a: print 3", "b: print 2"]);
}

#[test]
fn folder_create_ends_at_end_of_input() {
    let mut session = Session::new();
    let output = session.run("folder create partial", &mut ScriptedInput::new(["print 7"]));

    assert_eq!(output, ["Folder 'partial' created successfully with content: print 7"]);
    assert_eq!(session.state().folders.get("partial"), Some(&Folder::new("partial", "print 7")));
    assert_eq!(session.run("folder open partial", &mut NoInput), ["7"]);
}

#[test]
fn folder_terminator_may_be_padded() {
    let output = run_with_input("folder create f,folder list", &["print 1", "  .  "]);
    assert_eq!(output[1], "f: print 1");
}

#[test]
fn folder_shares_variables_with_caller() {
    let output = run_with_input("x = 2,folder create f,folder open f,print y",
                                &["y = x * 10", "."]);
    assert_eq!(output[1..], ["20"]);
}

#[test]
fn errors_inside_a_folder_do_not_stop_it() {
    let output = run_with_input("folder create f,folder open f,print \"after\"",
                                &["print 1/0", "print nope", "print 2", "."]);

    assert_eq!(output[1..],
               ["Error: Division by zero",
                "Error: Invalid expression: name 'nope' is not defined",
                "2",
                "after"]);
}

#[test]
fn self_opening_folder_hits_nesting_limit() {
    let output = run_with_input("folder create loop,folder open loop,print 1",
                                &["folder open loop", "."]);

    assert_eq!(output,
               ["Folder 'loop' created successfully with content: folder open loop",
                "Error: Maximum nesting depth of 64 exceeded",
                "1"]);
}

#[test]
fn input_evaluates_or_stores_raw_text() {
    let mut session = Session::new();
    let mut input = ScriptedInput::new(["2 * 21", "hello there", "1 +"]);

    let output = session.run("input a,input b,input c,print a,print b,print c", &mut input);

    assert_eq!(output, ["42", "hello there", "1 +"]);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn input_can_refer_to_existing_variables() {
    let output = run_with_input("base = 5,input n,print n", &["base + 1"]);
    assert_eq!(output, ["6"]);
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new();
    let mut second = Session::new();

    assert!(first.run("x = 1", &mut NoInput).is_empty());
    assert_eq!(second.run("print x", &mut NoInput),
               ["Error: Invalid expression: name 'x' is not defined"]);
    assert_eq!(first.run("print x", &mut NoInput), ["1"]);
}

#[test]
fn session_state_can_be_resumed() {
    let mut session = Session::new();
    session.run("count = 3", &mut NoInput);

    let mut resumed = Session::with_state(session.into_state());
    assert_eq!(resumed.run("count = count + 1,print count", &mut NoInput), ["4"]);
    assert_eq!(resumed.state().variables.len(), 1);
}

#[test]
fn conditional_body_can_open_a_folder() {
    let output = run_with_input("folder create f,flag = 1,if flag: folder open f",
                                &["print \"inside\"", "."]);
    assert_eq!(output[1..], ["inside"]);
}
