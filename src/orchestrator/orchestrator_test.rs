// ABOUTME: Tests for the Orchestrator - ordering, style alternation, failure
// ABOUTME: isolation, empty batches, and mismatched-length handling.

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use super::*;
use crate::error::HookError;
use crate::style::LogStyle;
use crate::tool::{Args, Status, Tool, args_from};

fn double(args: &Args) -> Result<Value, anyhow::Error> {
    let x = args
        .get("x")
        .and_then(Value::as_i64)
        .ok_or_else(|| anyhow::anyhow!("missing x"))?;
    Ok(json!(x * 2))
}

fn fail(_args: &Args) -> Result<Value, anyhow::Error> {
    anyhow::bail!("boom")
}

fn constant(_args: &Args) -> Result<Value, anyhow::Error> {
    Ok(json!("result"))
}

#[test]
fn test_single_success() {
    let results = run_batch(&[&double], &["double"], &[args_from(json!({"x": 3}))]).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status(), Status::Ok);
    assert_eq!(results[0].output(), Some(&json!(6)));
    assert_eq!(results[0].logs, ["calling double with {'x': 3}", "done"]);
}

#[test]
fn test_single_failure() {
    let results = run_batch(&[&fail], &["fail"], &[Args::new()]).unwrap();

    assert_eq!(results[0].status(), Status::Error);
    assert_eq!(results[0].error_message(), Some("boom"));
    assert_eq!(results[0].logs, ["calling fail with {}", "error: boom"]);
}

#[test]
fn test_styles_alternate_regardless_of_outcome() {
    let tools: [&dyn Tool; 3] = [&fail, &double, &fail];
    let payloads = [Args::new(), args_from(json!({"x": 1})), Args::new()];
    let results = run_batch(&tools, &["f0", "f1", "f2"], &payloads).unwrap();

    assert_eq!(
        results.iter().map(|r| r.logs.clone()).collect::<Vec<_>>(),
        vec![
            ["calling f0 with {}".to_string(), "error: boom".to_string()],
            ["tool f1 start {'x': 1}".to_string(), "ok".to_string()],
            ["calling f2 with {}".to_string(), "error: boom".to_string()],
        ]
    );
}

#[test]
fn test_empty_batch() {
    let results = run_batch::<&str>(&[], &[], &[]).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_failure_does_not_abort_batch() {
    let tools: [&dyn Tool; 3] = [&double, &fail, &double];
    let payloads = [
        args_from(json!({"x": 5})),
        Args::new(),
        args_from(json!({"x": 3})),
    ];
    let results = run_batch(&tools, &["calc1", "error_tool", "calc2"], &payloads).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].output(), Some(&json!(10)));
    assert_eq!(results[1].error_message(), Some("boom"));
    assert_eq!(results[1].logs[1], "failed: boom");
    assert_eq!(results[2].output(), Some(&json!(6)));
    assert_eq!(results[2].logs[1], "done");
}

#[test]
fn test_results_keep_input_order() {
    let order = RefCell::new(Vec::new());
    let record = |args: &Args| -> Result<Value, anyhow::Error> {
        let id = args["id"].clone();
        order.borrow_mut().push(id.clone());
        Ok(id)
    };
    let tools: [&dyn Tool; 4] = [&record, &record, &record, &record];
    let payloads: Vec<Args> = (0..4).map(|i| args_from(json!({"id": i}))).collect();
    let names = vec!["r".to_string(); 4];

    let results = run_batch(&tools, &names, &payloads).unwrap();

    let outputs: Vec<_> = results.iter().filter_map(|r| r.output().cloned()).collect();
    assert_eq!(outputs, vec![json!(0), json!(1), json!(2), json!(3)]);
    assert_eq!(*order.borrow(), outputs);
}

#[test]
fn test_style_for_position() {
    let orchestrator = Orchestrator::new();
    assert_eq!(orchestrator.style_for(0), LogStyle::A);
    assert_eq!(orchestrator.style_for(1), LogStyle::B);
    assert_eq!(orchestrator.style_for(10), LogStyle::A);
}

#[test]
fn test_mismatch_rejected_by_default() {
    let tools: [&dyn Tool; 2] = [&constant, &constant];
    let err = run_batch(&tools, &["a"], &[Args::new(), Args::new()]).unwrap_err();

    match err {
        HookError::LengthMismatch {
            tools,
            names,
            payloads,
        } => {
            assert_eq!((tools, names, payloads), (2, 1, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mismatch_rejected_before_any_call() {
    let calls = RefCell::new(0);
    let counted = |_: &Args| -> Result<Value, anyhow::Error> {
        *calls.borrow_mut() += 1;
        Ok(Value::Null)
    };
    let tools: [&dyn Tool; 2] = [&counted, &counted];
    assert!(run_batch(&tools, &["a", "b"], &[Args::new()]).is_err());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_mismatch_truncates_when_configured() {
    let config = OrchestratorConfig::new().on_length_mismatch(LengthPolicy::Truncate);
    let orchestrator = Orchestrator::with_config(config);
    let tools: [&dyn Tool; 3] = [&constant, &constant, &constant];

    let results = orchestrator
        .run_batch(&tools, &["a", "b"], &[Args::new(), Args::new(), Args::new()])
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].tool_name, "a");
    assert_eq!(results[1].tool_name, "b");
}

#[test]
fn test_default_config() {
    let orchestrator = Orchestrator::new();
    assert_eq!(
        orchestrator.config().on_length_mismatch,
        LengthPolicy::Reject
    );
}
