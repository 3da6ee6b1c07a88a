use std::{fs, path::Path, time::Duration};

use indoc::indoc;
use kaka::{
    Error,
    error::{RuntimeError, SyntaxError, UnknownCharacterError},
    interpreter::{
        console::BufferedConsole, evaluator::core::Interpreter, lexer::tokenize, limits::Limits,
        parser::parse_program, value::core::Value,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "kaka"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(&path.with_extension("out"));

        let mut console = BufferedConsole::new();
        if let Err(e) = run(&source, &mut console, Limits::default()) {
            panic!("Program {path:?} failed: {e}");
        }
        assert_eq!(console.output(), expected, "output of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn expected_output(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
                            .lines()
                            .map(str::to_string)
                            .collect()
}

fn run_program(src: &str, input: &[&str], limits: Limits) -> (Result<(), Error>, Vec<String>) {
    let mut console = BufferedConsole::with_input(input.iter().copied());
    let result = run(src, &mut console, limits);
    (result, console.into_output())
}

fn assert_output(src: &str, expected: &[&str]) {
    match run_program(src, &[], Limits::default()) {
        (Ok(()), output) => assert_eq!(output, expected),
        (Err(e), _) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run_program(src, &[], Limits::default()) {
        (Err(e), _) => e,
        (Ok(()), output) => panic!("Script succeeded but was expected to fail: {output:?}"),
    }
}

#[test]
fn empty_program_has_no_effect() {
    assert_output("ও কাকা আসি কাকা", &[]);
    assert_output("ও কাকা\n// nothing\nআসি কাকা\n", &[]);
}

#[test]
fn declared_literal_is_printed() {
    assert_output("ও কাকা কাকা রাখো x = ৪২; কাকা বলো x; আসি কাকা", &["42"]);
    assert_output("ও কাকা কাকা রাখো x = 'কাকা'; কাকা বলো x; আসি কাকা", &["কাকা"]);
    assert_output("ও কাকা কাকা রাখো x = ঠিক; কাকা বলো x; আসি কাকা", &["true"]);
    assert_output("ও কাকা কাকা রাখো x = ফালতু; কাকা বলো x; আসি কাকা", &["null"]);
}

#[test]
fn scenario_adds_two_variables() {
    assert_output("ও কাকা কাকা রাখো x = 5; কাকা রাখো y = 3; কাকা বলো x + y; আসি কাকা",
                  &["8"]);
}

#[test]
fn loops() {
    assert_output(indoc! {r#"
        ও কাকা
        যতক্ষণ কাকা (ভুল) { কাকা বলো "body"; }
        কাকা বলো "after";
        আসি কাকা
    "#},
                  &["after"]);

    assert_output(indoc! {"
        ও কাকা
        কাকা রাখো i = 0;
        যতক্ষণ কাকা (i < 100) {
            যদি কাকা (i == 3) { ব্যাস কাকা; }
            কাকা বলো i;
            i = i + 1;
        }
        কাকা বলো \"after\";
        আসি কাকা
    "},
                  &["0", "1", "2", "after"]);
}

#[test]
fn logical_operators_short_circuit() {
    assert_output(indoc! {r#"
        ও কাকা
        ফাংশন কাকা loud() { কাকা বলো "evaluated"; ফেরত নাও ঠিক; }
        কাকা বলো ভুল এবং loud();
        কাকা বলো ঠিক অথবা loud();
        কাকা বলো ফালতু এবং undefinedName;
        কাকা বলো "" অথবা loud();
        আসি কাকা
    "#},
                  &["false", "true", "null", "evaluated", "true"]);
}

#[test]
fn recursion() {
    assert_output(indoc! {"
        ও কাকা
        ফাংশন কাকা fact(n) {
            যদি কাকা (n <= 1) { ফেরত নাও 1; }
            ফেরত নাও n * fact(n - 1);
        }
        কাকা বলো fact(5);
        আসি কাকা
    "},
                  &["120"]);
}

#[test]
fn arrays_are_shared_by_reference() {
    assert_output(indoc! {r#"
        ও কাকা
        কাকা রাখো a = [1];
        কাকা রাখো b = a;
        b["push"](2);
        কাকা বলো a["length"];
        আসি কাকা
    "#},
                  &["2"]);
}

#[test]
fn functions_do_not_see_caller_locals() {
    let error = assert_failure(indoc! {"
        ও কাকা
        ফাংশন কাকা peek() { ফেরত নাও secret; }
        {
            কাকা রাখো secret = 1;
            peek();
        }
        আসি কাকা
    "});

    assert_eq!(error,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "secret".to_string(),
                                                                line: 2, }));
}

#[test]
fn functions_are_values() {
    assert_output(indoc! {"
        ও কাকা
        ফাংশন কাকা twice(f, x) { ফেরত নাও f(f(x)); }
        ফাংশন কাকা inc(n) { ফেরত নাও n + 1; }
        কাকা রাখো also = inc;
        কাকা বলো twice(also, 5);
        কাকা বলো also == inc;
        আসি কাকা
    "},
                  &["7", "true"]);
}

#[test]
fn block_declarations_do_not_leak() {
    let error = assert_failure(indoc! {"
        ও কাকা
        { কাকা রাখো inner = 1; }
        কাকা বলো inner;
        আসি কাকা
    "});

    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UndefinedVariable { line: 3, .. })));
}

#[test]
fn top_level_control_flow_stops_quietly() {
    assert_output("ও কাকা কাকা বলো 1; ফেরত নাও 2; কাকা বলো 3; আসি কাকা", &["1"]);
    assert_output("ও কাকা কাকা বলো 1; ব্যাস কাকা; কাকা বলো 3; আসি কাকা", &["1"]);
}

#[test]
fn input_is_read_from_the_console() {
    let src = indoc! {"
        ও কাকা
        কাকা রাখো a = কাকা শোনো;
        কাকা রাখো b = কাকা শোনো;
        কাকা বলো a + 1;
        কাকা বলো b + 1;
        কাকা বলো কাকা শোনো;
        আসি কাকা
    "};

    let mut console = BufferedConsole::with_input([" 41 ", "কাকা"]);
    run(src, &mut console, Limits::default()).unwrap();

    assert_eq!(console.output(), ["42", "কাকা1", "null"]);
    assert_eq!(console.prompts().len(), 3);
    assert_eq!(console.prompts()[0], "কাকা কিছু বলো (Input): ");
}

#[test]
fn blank_input_stays_a_string() {
    let (result, output) = run_program("ও কাকা কাকা বলো কাকা শোনো + 1; আসি কাকা",
                                       &["   "],
                                       Limits::default());

    assert!(result.is_ok());
    assert_eq!(output, ["   1"]);
}

#[test]
fn syntax_errors_prevent_execution() {
    let (result, output) =
        run_program("ও কাকা কাকা বলো 1; কাকা বলো \"oops; আসি কাকা", &[], Limits::default());
    assert!(matches!(result, Err(Error::Syntax(_))));
    assert!(output.is_empty());

    let (result, output) = run_program("ও কাকা কাকা বলো 1;", &[], Limits::default());
    assert_eq!(result, Err(Error::Syntax(SyntaxError::MissingProgramEnd { line: 1 })));
    assert!(output.is_empty());

    assert_eq!(assert_failure("কাকা বলো 1; আসি কাকা"),
               Error::Syntax(SyntaxError::MissingProgramStart { line: 1 }));
}

#[test]
fn unknown_characters_are_reported() {
    assert_eq!(assert_failure("ও কাকা\nকাকা বলো 1 @ 2;\nআসি কাকা"),
               Error::Lex(UnknownCharacterError { character: '@',
                                                  line:      2, }));
}

#[test]
fn runtime_errors_keep_earlier_output() {
    let (result, output) = run_program(indoc! {"
                                           ও কাকা
                                           কাকা বলো 1;
                                           missing = 2;
                                           কাকা বলো 3;
                                           আসি কাকা
                                       "},
                                       &[],
                                       Limits::default());

    assert_eq!(result,
               Err(Error::Runtime(RuntimeError::UndefinedVariable { name: "missing".to_string(),
                                                                    line: 3, })));
    assert_eq!(output, ["1"]);
}

#[test]
fn calling_a_non_function_fails() {
    assert_eq!(assert_failure("ও কাকা কাকা রাখো n = 5; n(); আসি কাকা"),
               Error::Runtime(RuntimeError::NotCallable { found: "number",
                                                          line:  1, }));
}

#[test]
fn member_access_requires_an_array() {
    assert_eq!(assert_failure("ও কাকা কাকা বলো \"abc\"[\"length\"]; আসি কাকা"),
               Error::Runtime(RuntimeError::UnsupportedMember { line: 1 }));
    assert_eq!(assert_failure("ও কাকা কাকা বলো [1][\"map\"]; আসি কাকা"),
               Error::Runtime(RuntimeError::UnsupportedMember { line: 1 }));
    assert_output("ও কাকা কাকা বলো [1, 2][0.5]; কাকা বলো [][0]; আসি কাকা",
                  &["undefined", "undefined"]);
}

#[test]
fn output_limit_stops_the_program() {
    let src = "ও কাকা যতক্ষণ কাকা (ঠিক) { কাকা বলো 1; } আসি কাকা";
    let (result, output) = run_program(src, &[], Limits::default().with_max_output_lines(3));

    assert_eq!(result,
               Err(Error::Runtime(RuntimeError::OutputLimitExceeded { limit: 3,
                                                                      line:  1, })));
    assert_eq!(output, ["1", "1", "1"]);
}

#[test]
fn time_limit_stops_an_endless_loop() {
    let src = "ও কাকা যতক্ষণ কাকা (ঠিক) { } আসি কাকা";
    let (result, _) = run_program(src,
                                  &[],
                                  Limits::default().with_time_limit(Duration::from_millis(20)));

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::TimeLimitExceeded { millis: 20, .. }))));
}

#[test]
fn call_depth_limit_stops_runaway_recursion() {
    let src = indoc! {"
        ও কাকা
        ফাংশন কাকা down(n) { ফেরত নাও down(n + 1); }
        down(0);
        আসি কাকা
    "};
    let (result, _) = run_program(src, &[], Limits::default().with_max_call_depth(50));

    assert_eq!(result,
               Err(Error::Runtime(RuntimeError::CallDepthExceeded { limit: 50,
                                                                    line:  2, })));
}

#[test]
fn default_call_depth_allows_deep_recursion() {
    assert_output(indoc! {"
        ও কাকা
        ফাংশন কাকা sum(n) {
            যদি কাকা (n == 0) { ফেরত নাও 0; }
            ফেরত নাও n + sum(n - 1);
        }
        কাকা বলো sum(999);
        আসি কাকা
    "},
                  &["499500"]);
}

#[test]
fn return_leaves_a_loop_inside_a_function() {
    assert_output(indoc! {"
        ও কাকা
        ফাংশন কাকা countTo(limit) {
            কাকা রাখো i = 0;
            যতক্ষণ কাকা (ঠিক) {
                যদি কাকা (i == limit) { ফেরত নাও i; }
                i = i + 1;
            }
            কাকা বলো \"unreachable\";
        }
        কাকা বলো countTo(3);
        কাকা বলো \"after\";
        আসি কাকা
    "},
                  &["3", "after"]);
}

#[test]
fn functions_declared_in_blocks_are_global() {
    assert_output(indoc! {"
        ও কাকা
        { ফাংশন কাকা g() { ফেরত নাও 7; } }
        কাকা বলো g();
        যদি কাকা (ঠিক) { ফাংশন কাকা h() { ফেরত নাও g() + 1; } }
        কাকা বলো h();
        আসি কাকা
    "},
                  &["7", "8"]);
}

#[test]
fn byte_order_mark_is_ignored() {
    assert_output("\u{FEFF}ও কাকা কাকা বলো 1; আসি কাকা", &["1"]);
}

#[test]
fn deeply_nested_parentheses_run() {
    let depth = 10_000;
    let src = format!("ও কাকা কাকা বলো {}1{}; আসি কাকা", "(".repeat(depth), ")".repeat(depth));

    assert_output(&src, &["1"]);
}

#[test]
fn long_operator_chains_run() {
    let src = format!("ও কাকা কাকা বলো 1{}; আসি কাকা", " + 1".repeat(100_000));
    assert_output(&src, &["100001"]);

    let src = format!("ও কাকা কাকা রাখো x = 0; {}3; কাকা বলো x; আসি কাকা",
                      "x = ".repeat(10_000));
    assert_output(&src, &["3"]);
}

#[test]
fn deeply_nested_blocks_run() {
    let depth = 10_000;
    let src = format!("ও কাকা {}কাকা বলো 2;{} আসি কাকা", "{ ".repeat(depth), " }".repeat(depth));

    assert_output(&src, &["2"]);
}

#[test]
fn globals_survive_for_inspection() {
    let tokens = tokenize("ও কাকা কাকা রাখো answer = 6 * 7; { কাকা রাখো hidden = 1; } আসি কাকা").unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut console = BufferedConsole::new();
    let mut interpreter = Interpreter::new(&mut console, Limits::default());
    interpreter.interpret(&program).unwrap();

    assert_eq!(interpreter.global("answer"), Some(Value::Number(42.0)));
    assert_eq!(interpreter.global("hidden"), None);
}
