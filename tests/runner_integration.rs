//! Integration tests for the validation runner.
//!
//! Covers input precedence, the success/failure branch, run naming, and
//! execution-time overrides against the in-memory engine.

use checkgate::engine::{
    DataContext, InMemoryContext, InMemoryEngine, RuntimeEnvironment, StaticCheckpoint,
    ValidationEngine,
};
use checkgate::{run_validation, CheckgateError, ValidationRequest};

const ROOT_DIR: &str = "/srv/validation/project";

/// Engine with a passing and a failing checkpoint, reachable both through
/// default discovery and through an explicit root directory.
fn test_engine() -> InMemoryEngine {
    let context = InMemoryContext::new()
        .with_checkpoint(StaticCheckpoint::passing("my_checkpoint_pass"))
        .with_checkpoint(StaticCheckpoint::failing("my_checkpoint_fail"));
    InMemoryEngine::builder()
        .context(context.clone())
        .context_at(ROOT_DIR, context)
        .build()
}

#[tokio::test]
async fn validation_with_checkpoint_name() {
    let result = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .context_root_dir(ROOT_DIR)
            .build(),
    )
    .await
    .unwrap();

    assert!(result.is_success(), "checkpoint validation should pass");
    assert_eq!(result.checkpoint_name, "my_checkpoint_pass");
}

#[tokio::test]
async fn validation_with_checkpoint_object() {
    let engine = test_engine();
    let context = engine
        .load_context(Some(ROOT_DIR.as_ref()), &Default::default())
        .await
        .unwrap();
    let checkpoint = context.checkpoint("my_checkpoint_pass").await.unwrap();

    let result = run_validation(
        &engine,
        ValidationRequest::builder()
            .checkpoint(checkpoint)
            .context_root_dir(ROOT_DIR)
            .build(),
    )
    .await
    .unwrap();

    assert!(result.is_success(), "checkpoint validation should pass");
}

#[tokio::test]
async fn checkpoint_object_supersedes_checkpoint_name() {
    // The name points at the failing checkpoint; the object must win.
    let result = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint(StaticCheckpoint::passing("my_checkpoint_pass"))
            .checkpoint_name("my_checkpoint_fail")
            .context_root_dir(ROOT_DIR)
            .build(),
    )
    .await
    .unwrap();

    assert!(result.is_success(), "checkpoint validation should pass");
}

#[tokio::test]
async fn validation_with_context_object() {
    let context =
        InMemoryContext::new().with_checkpoint(StaticCheckpoint::passing("my_checkpoint_pass"));

    // The engine itself knows nothing; the supplied context must be used.
    let result = run_validation(
        &InMemoryEngine::builder().build(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .context(context)
            .build(),
    )
    .await
    .unwrap();

    assert!(result.is_success(), "checkpoint validation should pass");
}

#[tokio::test]
async fn context_object_supersedes_context_root_dir() {
    // The checkpoint exists only under the root-dir context. With a context
    // object supplied that lacks it, resolution must fail, proving the object
    // took precedence.
    let stripped = InMemoryContext::new()
        .with_checkpoint(StaticCheckpoint::passing("my_checkpoint_pass"))
        .without_checkpoint("my_checkpoint_pass");

    let err = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .context(stripped)
            .context_root_dir(ROOT_DIR)
            .build(),
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, CheckgateError::CheckpointNotFound(ref name) if name == "my_checkpoint_pass"),
        "expected CheckpointNotFound, got: {err}"
    );
}

#[tokio::test]
async fn object_forms_never_dereference_identifier_forms() {
    // Both identifier forms point nowhere; with both objects supplied the
    // engine must never be asked to resolve them.
    let result = run_validation(
        &InMemoryEngine::builder().build(),
        ValidationRequest::builder()
            .checkpoint(StaticCheckpoint::passing("my_checkpoint_pass"))
            .checkpoint_name("no_such_checkpoint")
            .context(InMemoryContext::new())
            .context_root_dir("/no/such/dir")
            .build(),
    )
    .await
    .unwrap();

    assert!(result.is_success());
}

#[tokio::test]
async fn failed_validation_raises_by_default() {
    let err = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_fail")
            .context_root_dir(ROOT_DIR)
            .build(),
    )
    .await
    .unwrap_err();

    let result = err
        .validation_result()
        .expect("validation result should be accessible on the raised error");
    assert!(!result.is_success());
    assert_eq!(result.checkpoint_name, "my_checkpoint_fail");
    assert_eq!(result.statistics().unsuccessful_validations, 1);
}

#[tokio::test]
async fn failed_validation_with_no_raise() {
    let result = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_fail")
            .context_root_dir(ROOT_DIR)
            .raise_on_failure(false)
            .build(),
    )
    .await
    .unwrap();

    assert!(
        !result.is_success(),
        "checkpoint validation should fail without raising an error"
    );
}

#[tokio::test]
async fn run_name_properly_set() {
    let result = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .context_root_dir(ROOT_DIR)
            .run_name("THIS IS A CUSTOM RUN NAME")
            .build(),
    )
    .await
    .unwrap();

    assert_eq!(result.run_id.run_name, "THIS IS A CUSTOM RUN NAME");
}

#[tokio::test]
async fn run_name_defaults_to_timestamp() {
    let result = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .build(),
    )
    .await
    .unwrap();

    // YYYYMMDDTHHMMSS.ffffffZ
    assert!(result.run_id.run_name.ends_with('Z'));
    assert!(result.run_id.run_name.contains('T'));
}

#[tokio::test]
async fn checkpoint_overrides_visible_at_execution_time() {
    let result = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .context_root_dir(ROOT_DIR)
            .checkpoint_override(
                "validations",
                serde_json::json!([{
                    "batch_request": "yellow_tripdata_sample",
                    "expectation_suite_name": "taxi.demo_pass",
                }]),
            )
            .build(),
    )
    .await
    .unwrap();

    assert!(result.is_success());
    assert!(result.checkpoint_config.contains_key("validations"));
}

#[tokio::test]
async fn runtime_environment_applied_during_context_construction() {
    let mut env = RuntimeEnvironment::new();
    env.insert("datasource".into(), serde_json::json!("warehouse"));

    let engine = test_engine();
    let context = engine
        .load_context(Some(ROOT_DIR.as_ref()), &env)
        .await
        .unwrap();
    assert_eq!(
        context.runtime_environment().get("datasource"),
        Some(&serde_json::json!("warehouse"))
    );
}

#[tokio::test]
async fn missing_checkpoint_inputs_fail_fast() {
    let err = run_validation(
        &test_engine(),
        ValidationRequest::builder().build(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckgateError::MissingCheckpoint));
}

#[tokio::test]
async fn engine_errors_propagate_unchanged() {
    let err = run_validation(
        &test_engine(),
        ValidationRequest::builder()
            .checkpoint_name("my_checkpoint_pass")
            .context_root_dir("/no/such/dir")
            .build(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckgateError::ContextLoad { .. }));
}

#[tokio::test]
async fn success_returned_regardless_of_raise_flag() {
    for raise in [true, false] {
        let result = run_validation(
            &test_engine(),
            ValidationRequest::builder()
                .checkpoint_name("my_checkpoint_pass")
                .raise_on_failure(raise)
                .build(),
        )
        .await
        .unwrap();
        assert!(result.is_success());
    }
}

#[tokio::test]
async fn concurrent_runs_are_independent() {
    let engine = std::sync::Arc::new(test_engine());
    let mut handles = Vec::new();
    for i in 0..8 {
        let engine = engine.clone();
        let name = if i % 2 == 0 {
            "my_checkpoint_pass"
        } else {
            "my_checkpoint_fail"
        };
        handles.push(tokio::spawn(async move {
            run_validation(
                &*engine,
                ValidationRequest::builder()
                    .checkpoint_name(name)
                    .run_name(format!("run-{i}"))
                    .raise_on_failure(false)
                    .build(),
            )
            .await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.run_id.run_name, format!("run-{i}"));
        assert_eq!(result.is_success(), i % 2 == 0);
    }
}
