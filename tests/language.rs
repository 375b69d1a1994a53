use std::{fs, path::Path};

use pindscript::{
    error::{Error, ErrorKind, FixedPhrasebook},
    interpreter::evaluator::core::{Config, Interpreter, SUCCESS_LINE},
    run_source, run_source_with,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn run_plain(src: &str) -> Result<Vec<String>, Error> {
    run_source_with(src, Interpreter::new().with_phrasebook(Box::new(FixedPhrasebook)))
}

/// Runs `src` and checks the printed lines, not counting the success line.
fn assert_output(src: &str, expected: &[&str]) {
    let mut output = run_plain(src).unwrap_or_else(|e| panic!("Script failed: {e}"));

    assert_eq!(output.pop().as_deref(), Some(SUCCESS_LINE), "missing success line");
    assert_eq!(output, expected);
}

fn assert_failure_kind(src: &str, kind: ErrorKind) {
    match run_plain(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail: {output:?}"),
        Err(e) => assert_eq!(e.runtime_kind(), Some(kind), "unexpected error: {e}"),
    }
}

#[test]
fn program_fixtures_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "pind"))
    {
        let path = entry.path();
        let source = read(path);
        let expected = read(&path.with_extension("out"));

        let mut output = run_plain(&source).unwrap_or_else(|e| panic!("{path:?} failed:\n{e}"));
        assert_eq!(output.pop().as_deref(), Some(SUCCESS_LINE), "{path:?} did not finish");
        assert_eq!(output.join("\n"), expected.trim_end_matches('\n'), "{path:?}");
        count += 1;
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn readme_examples_work() {
    let content = read(Path::new("README.md"));
    let blocks = extract_pindscript_blocks(&content);

    for (i, code) in blocks.iter().enumerate() {
        if let Err(e) = run_plain(code) {
            panic!("README example {} failed:\n{}\nError: {}", i + 1, code, e);
        }
    }

    assert!(!blocks.is_empty(), "No pindscript examples found in README.md");
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

fn extract_pindscript_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```pindscript") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn declaration_and_arithmetic() {
    assert_output("mannle x = 5; vikha(x + 2);", &["7"]);
    assert_output("vikha(2 + 3 * 4); vikha((2 + 3) * 4); vikha(10 - 4 - 3);",
                  &["14", "20", "3"]);
    assert_output("vikha(7 / 2); vikha(-7 % 3);", &["3.5", "-1"]);
    assert_output("vikha(5.); vikha(5. + 0.5);", &["5", "5.5"]);
}

#[test]
fn short_circuit_skips_side_effects() {
    assert_output("mannle seen = [];
                   kamm touch() { thuss(seen, 1); bhajo true; }
                   false && touch();
                   true || touch();
                   vikha(lambai(seen));
                   true && touch();
                   vikha(lambai(seen));",
                  &["0", "1"]);
}

#[test]
fn short_circuit_with_numbers() {
    assert_output("mannle calls = [];
                   kamm f() { thuss(calls, 1); bhajo 9; }
                   vikha(0 && f());
                   vikha(lambai(calls));
                   vikha(1 || f());
                   vikha(lambai(calls));
                   vikha(1 && f());
                   vikha(lambai(calls));
                   vikha(0 || f());
                   vikha(lambai(calls));",
                  &["0", "0", "1", "0", "9", "1", "9", "2"]);
}

#[test]
fn closures_capture_declaring_scope() {
    assert_output("kamm make() {
                       mannle count = 0;
                       kamm inc() { count++; bhajo count; }
                       bhajo inc;
                   }
                   mannle c = make();
                   c(); c();
                   vikha(c());",
                  &["3"]);
}

#[test]
fn recursive_factorial() {
    assert_output("kamm fact(n) { je (n <= 1) { bhajo 1; } bhajo n * fact(n - 1); }
                   vikha(fact(5));",
                  &["120"]);
}

#[test]
fn endless_loop_times_out_without_success_line() {
    let err = run_plain("vikha('start'); jado (true) { }").unwrap_err();

    assert_eq!(err.runtime_kind(), Some(ErrorKind::Timeout));
    assert_eq!(err.output(), ["start"]);
    assert!(err.to_string()
               .contains("Execution step limit exceeded (> 5000 steps). Likely an infinite loop."));
}

#[test]
fn runaway_recursion_times_out() {
    assert_failure_kind("kamm forever(n) { bhajo forever(n + 1); } forever(0);",
                        ErrorKind::Timeout);
}

#[test]
fn step_ceiling_is_configurable() {
    let source = "mannle i = 0; jado (i < 100) { i++; }";
    let tight = Interpreter::with_config(Config { max_steps: 50 });
    let roomy = Interpreter::with_config(Config { max_steps: 500 });

    assert_eq!(run_source_with(source, tight).unwrap_err().runtime_kind(),
               Some(ErrorKind::Timeout));
    assert!(run_source_with(source, roomy).is_ok());
}

#[test]
fn duplicate_declaration_in_same_scope() {
    assert_failure_kind("mannle x = 1; mannle x = 2;", ErrorKind::Duplicate);
    assert_failure_kind("mannle true = 1;", ErrorKind::Duplicate);
}

#[test]
fn shadowing_in_nested_scope() {
    assert_output("mannle x = 1;
                   je (true) { mannle x = 2; vikha(x); }
                   vikha(x);",
                  &["2", "1"]);
}

#[test]
fn undeclared_names() {
    assert_failure_kind("vikha(y);", ErrorKind::Undeclared);
    assert_failure_kind("y = 3;", ErrorKind::Undeclared);
}

#[test]
fn division_by_zero() {
    assert_failure_kind("vikha(1 / 0);", ErrorKind::MathError);
    assert_failure_kind("mannle z = 0; vikha(5 % z);", ErrorKind::MathError);
}

#[test]
fn calling_non_functions() {
    assert_failure_kind("mannle x = 5; x();", ErrorKind::FunctionError);
    assert_failure_kind("'text'(1);", ErrorKind::FunctionError);
}

#[test]
fn type_errors() {
    assert_failure_kind("vikha(5[0]);", ErrorKind::TypeError);
    assert_failure_kind("mannle s = 'abc'; s[0] = 'x';", ErrorKind::TypeError);
    assert_failure_kind("vikha(true - 1);", ErrorKind::TypeError);
    assert_failure_kind("vikha(1 < 'a');", ErrorKind::TypeError);
    assert_failure_kind("thuss('abc', 1);", ErrorKind::TypeError);
    assert_failure_kind("vadda_kro(1);", ErrorKind::TypeError);
}

#[test]
fn stray_loop_control_is_generic() {
    assert_failure_kind("langh_jaa;", ErrorKind::Generic);
    assert_failure_kind("kamm f() { chaddo; } jado (true) { f(); }", ErrorKind::Generic);
}

#[test]
fn failure_keeps_earlier_output() {
    let err = run_plain("vikha(1); vikha(2); vikha(nope); vikha(3);").unwrap_err();

    assert_eq!(err.output(), ["1", "2"]);
}

#[test]
fn top_level_return_ends_run_quietly() {
    let output = run_plain("vikha('pehla'); bhajo 5; vikha('dooja');").unwrap();

    assert_eq!(output, ["pehla"]);
}

#[test]
fn every_statement_kind() {
    assert_output("mannle total = 0;
                   kamm add(n) { total += n; }
                   jadd_vi (mannle i = 0; i < 3; i++) { add(i); }
                   mannle j = 0;
                   jado (j < 2) { j++; }
                   eh_kro { j--; } jado (j > 0);
                   je (total == 3) { vikha('jadd_vi'); } hor_je (true) { vikha('hor_je'); } fer { vikha('fer'); }
                   { vikha(total + j); }",
                  &["jadd_vi", "3"]);
}

#[test]
fn string_concatenation_renders_values() {
    assert_output("vikha('n=' + 4); vikha('a' + [1, 2]); vikha(1.5 + 'x'); vikha('' + true);",
                  &["n=4", "a1,2", "1.5x", "true"]);
}

#[test]
fn equality_never_coerces() {
    assert_output("vikha(1 == '1'); vikha(1 === 1); vikha('a' !== 'a'); vikha([] == []);",
                  &["false", "true", "false", "false"]);
}

#[test]
fn lex_and_parse_errors_are_reported() {
    let lex = run_source("mannle x = 1 # 2;").unwrap_err();
    assert!(matches!(lex, Error::Lex(_)));
    assert!(lex.to_string().contains("'#'"));

    let parse = run_source("mannle = 5;").unwrap_err();
    assert!(matches!(parse, Error::Parse(_)));
    assert_eq!(parse.runtime_kind(), None);

    let unterminated = run_source("vikha('open);").unwrap_err();
    assert!(matches!(unterminated, Error::Lex(_)));
}

#[test]
fn comments_are_ignored() {
    assert_output("// line comment\nvikha(1); /* block\ncomment */ vikha(2);",
                  &["1", "2"]);
}
