use std::fs::{self};

use tally::{
    ast::{BinaryOperator, Expr},
    calculate,
    console::Command,
    evaluate,
    error::{CommandError, EvalError, ParseError},
    interpreter::{
        environment::Environment,
        lexer::{Token, tokenize},
        parser::core::Parser,
        value::Value,
    },
    parse_expression,
    session::{Session, was_recorded},
    storage::State,
};
use walkdir::WalkDir;

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

        for (i, code) in extract_tally_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut session = Session::new();
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                if let Err(e) = session.execute(line) {
                    panic!("Example {} in {:?} failed at '{}':\n{}\nError: {:?}",
                           i + 1,
                           path,
                           line,
                           code,
                           e);
                }
            }
        }
    }

    assert!(count > 0, "No tally examples found in book/src");
}

fn extract_tally_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```tally") {
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

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(Value::Number(n)) => assert!((n - expected).abs() < 1e-12,
                                        "'{src}' evaluated to {n}, expected {expected}"),
        other => panic!("'{src}' evaluated to {other:?}, expected {expected}"),
    }
}

fn assert_parse_failure(src: &str, expected: &ParseError) {
    match parse_expression(src) {
        Err(e) => assert_eq!(&e, expected, "wrong parse error for '{src}'"),
        Ok(expr) => panic!("'{src}' parsed as {expr} but was expected to fail"),
    }
}

fn assert_eval_failure(src: &str, expected: &EvalError) {
    match calculate(src) {
        Err(CommandError::Eval(e)) => assert_eq!(&e, expected, "wrong error for '{src}'"),
        other => panic!("'{src}' returned {other:?}, expected {expected:?}"),
    }
}

fn unexpected(token: &str) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string() }
}

#[test]
fn lexer_recognizes_every_token_kind() {
    assert_eq!(tokenize("x_1 = (3.5 + .5) * 2 - y / 4"),
               vec![Token::Identifier("x_1".to_string()),
                    Token::Assign,
                    Token::LParen,
                    Token::Number("3.5".to_string()),
                    Token::Plus,
                    Token::Number(".5".to_string()),
                    Token::RParen,
                    Token::Multiply,
                    Token::Number("2".to_string()),
                    Token::Minus,
                    Token::Identifier("y".to_string()),
                    Token::Divide,
                    Token::Number("4".to_string()),
                    Token::EndOfInput]);
}

#[test]
fn lexer_keeps_malformed_numbers_and_invalid_characters() {
    assert_eq!(tokenize("1.2.3\t# 2x"),
               vec![Token::Number("1.2.3".to_string()),
                    Token::Invalid('#'),
                    Token::Number("2".to_string()),
                    Token::Identifier("x".to_string()),
                    Token::EndOfInput]);
    assert_eq!(tokenize("   "), vec![Token::EndOfInput]);
    assert_eq!(tokenize("é").first(), Some(&Token::Invalid('é')));
}

#[test]
fn parser_keeps_two_tokens_of_lookahead() {
    let parser = Parser::new("a + 1");
    assert_eq!(parser.current(), &Token::Identifier("a".to_string()));
    assert_eq!(parser.peek(), &Token::Plus);

    let parser = Parser::new("7");
    assert_eq!(parser.current(), &Token::Number("7".to_string()));
    assert_eq!(parser.peek(), &Token::EndOfInput);
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("8 - 3 - 2", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("((7))", 7.0);
}

#[test]
fn unary_minus_desugars_to_subtraction_from_zero() {
    assert_value("-5+2", -3.0);
    assert_value("- -3", 3.0);
    assert_value("-(1+2)", -3.0);
    assert_value("2 * -3", -6.0);

    let expr = parse_expression("-x").unwrap();
    assert_eq!(expr,
               Expr::binary(Expr::Number { value: 0.0 },
                            BinaryOperator::Sub,
                            Expr::Variable { name: "x".to_string() }));
}

#[test]
fn parsing_is_repeatable() {
    let line = "total = (price + 2.5) * -count / 3";
    assert_eq!(parse_expression(line), parse_expression(line));
}

#[test]
fn assignment_round_trip() {
    let mut env = Environment::new();

    let assign = parse_expression("x=5").unwrap();
    assert_eq!(evaluate(&assign, &mut env), Ok(Value::Number(5.0)));

    let read = parse_expression("x+1").unwrap();
    assert_eq!(evaluate(&read, &mut env), Ok(Value::Number(6.0)));
}

#[test]
fn text_assignment_replaces_numeric_variable() {
    let mut session =
        Session::from_state(State { string_variables: [("greeting".to_string(),
                                                        "hello".to_string())].into(),
                                    ..State::default() });

    assert_eq!(session.execute("x = 5"), Ok(Value::Number(5.0)));
    assert_eq!(session.execute("x = greeting"), Ok(Value::from("hello")));

    assert!(!session.environment().numbers().contains_key("x"));
    assert_eq!(session.environment().strings().get("x").map(String::as_str),
               Some("hello"));
    assert_eq!(session.execute("x + 1"),
               Err(CommandError::Eval(EvalError::TypeMismatch)));

    assert_eq!(session.execute("x = 2"), Ok(Value::Number(2.0)));
    assert!(!session.environment().strings().contains_key("x"));
}

#[test]
fn text_is_never_coerced() {
    let mut env = Environment::from_maps(Vec::<(String, f64)>::new(), [("s".to_string(), "12".to_string())]);

    for line in ["s + 1", "1 + s", "s * s", "-s", "s / 1"] {
        let expr = parse_expression(line).unwrap();
        assert_eq!(evaluate(&expr, &mut env), Err(EvalError::TypeMismatch), "{line}");
    }

    let expr = parse_expression("s").unwrap();
    assert_eq!(evaluate(&expr, &mut env), Ok(Value::from("12")));
}

#[test]
fn numbers_shadow_text_with_the_same_name() {
    let env = Environment::from_maps([("v".to_string(), 1.0)], [("v".to_string(), "one".to_string())]);
    assert_eq!(env.get("v"), Some(&Value::Number(1.0)));
    assert_eq!(env.len(), 1);
}

#[test]
fn evaluation_errors() {
    assert_eval_failure("10/0", &EvalError::DivisionByZero);
    assert_eval_failure("1 / (2 - 2)", &EvalError::DivisionByZero);
    assert_eval_failure("foo + 1", &EvalError::UndefinedVariable { name: "foo".to_string() });
    assert_eval_failure("y = foo", &EvalError::UndefinedVariable { name: "foo".to_string() });
}

#[test]
fn failed_assignment_leaves_environment_untouched() {
    let mut session = Session::new();
    session.execute("x = 1").unwrap();

    assert_eq!(session.execute("x = 1 / 0"),
               Err(CommandError::Eval(EvalError::DivisionByZero)));
    assert_eq!(session.environment().get("x"), Some(&Value::Number(1.0)));

    assert!(session.execute("y = missing").is_err());
    assert!(session.environment().get("y").is_none());
}

#[test]
fn parse_errors() {
    assert_parse_failure("1 +", &unexpected(""));
    assert_parse_failure("(1 + 2", &unexpected(""));
    assert_parse_failure("2 $ 3", &unexpected("$"));
    assert_parse_failure(")", &unexpected(")"));
    assert_parse_failure("1 2", &unexpected("2"));
    assert_parse_failure("1.2.3 + 1",
                         &ParseError::InvalidNumericLiteral { literal: "1.2.3".to_string() });
    assert_parse_failure(".", &ParseError::InvalidNumericLiteral { literal: ".".to_string() });
    assert_parse_failure("a+1 = b", &ParseError::InvalidAssignmentTarget);
    assert_parse_failure("3 = 4", &ParseError::InvalidAssignmentTarget);
}

#[test]
fn literals_beyond_f64_range_are_rejected() {
    let huge = format!("1{}", "0".repeat(400));
    assert_parse_failure(&huge, &ParseError::LiteralTooLarge { literal: huge.clone() });
    assert_parse_failure(&format!("x = {huge}"),
                         &ParseError::LiteralTooLarge { literal: huge.clone() });

    let large = format!("1{}", "0".repeat(300));
    assert_value(&large, 1e300);
}

#[test]
fn overflowing_arithmetic_is_an_error() {
    let mut session = Session::new();
    session.execute(&format!("a = 1{}", "0".repeat(300))).unwrap();

    assert_eq!(session.execute("b = a * a"),
               Err(CommandError::Eval(EvalError::Overflow)));
    assert_eq!(session.execute("0 - a * a"),
               Err(CommandError::Eval(EvalError::Overflow)));
    assert!(session.environment().get("b").is_none());
    assert_eq!(session.execute("a - a"), Ok(Value::Number(0.0)));

    let state = session.to_state();
    assert!(state.variables.values().all(|v| v.is_finite()));
    assert_eq!(state.history.len(), 4);
}

#[test]
fn assignments_do_not_nest() {
    assert_parse_failure("a = b = 3", &unexpected("="));
    assert_parse_failure("(a = 5) + 1", &unexpected("="));
    assert_parse_failure("b = (a = 5) + 1", &unexpected("="));
}

#[test]
fn empty_lines_are_rejected_before_parsing() {
    assert_eq!(calculate(""), Err(CommandError::Empty));
    assert_eq!(calculate(" \t "), Err(CommandError::Empty));
}

#[test]
fn history_records_evaluation_failures_but_not_parse_failures() {
    let mut session = Session::new();

    assert!(session.execute("x = 2").is_ok());
    assert!(matches!(session.execute("x +"), Err(CommandError::Parse(_))));
    assert!(matches!(session.execute("undefined_name"), Err(CommandError::Eval(_))));
    assert!(matches!(session.execute("   "), Err(CommandError::Empty)));
    assert!(session.execute("  x * 3  ").is_ok());

    assert_eq!(session.history(), vec!["x = 2", "undefined_name", "x * 3"]);
}

#[test]
fn recorded_commands_are_exactly_the_ones_worth_saving() {
    let mut session = Session::new();

    for line in ["x = 2", "x +", "undefined_name", "", "x / 0", "x * 3", "1.2.3"] {
        let before = session.history().len();
        let outcome = session.execute(line);
        assert_eq!(was_recorded(&outcome),
                   session.history().len() == before + 1,
                   "'{line}' -> {outcome:?}");
    }

    assert_eq!(session.history(), vec!["x = 2", "undefined_name", "x / 0", "x * 3"]);
}

#[test]
fn console_keywords_are_not_expressions() {
    assert_eq!(Command::classify("exit"), Command::Exit);
    assert_eq!(Command::classify("\thistory  "), Command::History);
    assert_eq!(Command::classify(""), Command::Blank);
    assert_eq!(Command::classify(" \t"), Command::Blank);
    assert_eq!(Command::classify("  x = 1  "), Command::Evaluate("x = 1"));
    assert_eq!(Command::classify("history + 1"), Command::Evaluate("history + 1"));
    assert_eq!(Command::classify("exits"), Command::Evaluate("exits"));
}

#[test]
fn history_keeps_the_ten_most_recent_commands() {
    let mut session = Session::new();
    for i in 1..=11 {
        session.execute(&format!("v{i} = {i}")).unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "v2 = 2");
    assert_eq!(history[9], "v11 = 11");
}

#[test]
fn session_state_round_trip() {
    let mut session = Session::new();
    session.execute("a = 1.5").unwrap();
    session.execute("b = a * 2").unwrap();

    let state = session.to_state();
    assert_eq!(state.variables.get("b"), Some(&3.0));
    assert_eq!(state.history, vec!["a = 1.5", "b = a * 2"]);

    let mut restored = Session::from_state(state);
    assert_eq!(restored.execute("a + b"), Ok(Value::Number(4.5)));
    assert_eq!(restored.history().len(), 3);
}

#[test]
fn values_render_like_the_console_prints_them() {
    assert_eq!(calculate("2 + 3 * 4").unwrap().to_string(), "14");
    assert_eq!(calculate("1 / 4").unwrap().to_string(), "0.25");
    assert_eq!(calculate("-5 + 2").unwrap().to_string(), "-3");
    assert_eq!(parse_expression("a = -(1 + b) * 2").unwrap().to_string(),
               "a = ((0 - (1 + b)) * 2)");
}
