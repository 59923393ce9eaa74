//! End-to-end runs of the benchmark harness

use remold_core::{
    analyze, analyze_with_token, CancelToken, Directive, Error, Field, Payload, Scalar,
    CONCURRENCY_THREADS, TASKS_PER_THREAD,
};

fn representative_payload() -> Payload {
    let address = Payload::new()
        .field(Field::scalar("street", "12 Rue de la Paix"))
        .field(Field::scalar("city", "Paris"));
    Payload::new()
        .field(
            Field::scalar("user_id", "u-93")
                .directive(Directive::CleanPrefix("user_".to_string())),
        )
        .field(
            Field::scalar("nickname", Scalar::Null)
                .directive(Directive::DefaultValue(Scalar::from("N/A"))),
        )
        .field(
            Field::composite("home_address", address)
                .directive(Directive::NestedPath("address.home".to_string())),
        )
}

#[test]
fn analyze_produces_a_complete_report() {
    let report = analyze(&representative_payload()).unwrap();

    for stats in [report.json_timing, report.node_timing] {
        assert!(stats.min_ms >= 0.0);
        assert!(stats.min_ms <= stats.avg_ms);
        assert!(stats.avg_ms <= stats.max_ms);
    }

    assert_eq!(report.concurrency.threads, CONCURRENCY_THREADS);
    assert_eq!(
        report.concurrency.total_tasks,
        CONCURRENCY_THREADS * TASKS_PER_THREAD
    );
}

#[test]
fn report_serializes_for_the_boundary_layer() {
    let report = analyze(&representative_payload()).unwrap();
    let rendered = serde_json::to_value(&report).unwrap();

    assert!(rendered["json_timing"]["avg_ms"].is_number());
    assert!(rendered["node_timing"]["max_ms"].is_number());
    assert!(rendered["memory"]["json_delta_kb"].is_number());
    assert_eq!(rendered["concurrency"]["total_tasks"], 50);
}

#[test]
fn cancellation_surfaces_instead_of_being_swallowed() {
    let token = CancelToken::new();
    token.cancel();
    let err = analyze_with_token(&representative_payload(), &token).unwrap_err();
    assert!(matches!(err, Error::Interrupted { .. }));
}

#[test]
fn analyze_propagates_engine_failures() {
    // Sequential timing runs hit the conflict before the batch starts.
    let conflicting = Payload::new()
        .field(Field::scalar("a", 1i64).directive(Directive::NestedPath("slot".to_string())))
        .field(Field::scalar("b", 2i64).directive(Directive::NestedPath("slot".to_string())));
    let err = analyze(&conflicting).unwrap_err();
    assert!(matches!(err, Error::PathConflict { .. }));
}
