//! Conformance suite for the transformation engine
//!
//! Exercises the canonical user-record fixture: every directive kind at
//! once, nested composites, and path overrides fighting for placement. The
//! backend-equality assertions here are the precondition that makes the
//! benchmark harness meaningful.

use remold_core::{
    transform, Backend, CaseMode, Directive, Field, Payload, Scalar,
};
use serde_json::json;

/// The canonical fixture: a user record exercising every directive kind
fn user_record() -> Payload {
    let home_address = Payload::new()
        .field(Field::scalar("street", "12 Rue de la Paix"))
        .field(Field::scalar("city", "Paris"))
        .field(Field::scalar("zip_code", "75002"));
    let office_address = Payload::new()
        .field(Field::scalar("street", "3 Place Bellecour"))
        .field(Field::scalar("city", "Lyon"))
        .field(Field::scalar("zip_code", "69002"));
    let items = Payload::new()
        .field(Field::scalar("name", "keyboard"))
        .field(Field::scalar("quantity", 2i64))
        .field(Field::scalar("price", 49.9));
    let orders = Payload::new()
        .field(
            Field::scalar("order_id", "o-2024-11")
                .directive(Directive::NestedPath("audit.order.id".to_string())),
        )
        .field(Field::composite("items", items))
        .field(Field::scalar("total_amount", 99.8));

    Payload::new()
        .field(
            Field::scalar("user_id", "u-93")
                .directive(Directive::CleanPrefix("user_".to_string())),
        )
        .field(
            Field::scalar("name", "John Doe")
                .directive(Directive::CaseTransform(CaseMode::Upper)),
        )
        .field(
            Field::scalar("email", "John.Doe@EXAMPLE.com")
                .directive(Directive::CaseTransform(CaseMode::Lower)),
        )
        .field(
            Field::scalar("nickname", Scalar::Null)
                .directive(Directive::DefaultValue(Scalar::from("N/A"))),
        )
        .field(
            Field::composite("home_address", home_address)
                .directive(Directive::NestedPath("address.home".to_string())),
        )
        .field(
            Field::composite("office_address", office_address)
                .directive(Directive::NestedPath("address.office".to_string())),
        )
        .field(Field::composite("orders", orders))
}

fn expected_tree() -> serde_json::Value {
    json!({
        "id": "u-93",
        "name": "JOHN DOE",
        "email": "john.doe@example.com",
        "nickname": "N/A",
        "address": {
            "home": {
                "street": "12 Rue de la Paix",
                "city": "Paris",
                "zip_code": "75002"
            },
            "office": {
                "street": "3 Place Bellecour",
                "city": "Lyon",
                "zip_code": "69002"
            }
        },
        "audit": {"order": {"id": "o-2024-11"}},
        "orders": {
            "items": {"name": "keyboard", "quantity": 2, "price": 49.9},
            "total_amount": 99.8
        }
    })
}

#[test]
fn backends_produce_identical_trees() {
    let json_tree = transform(&user_record(), Backend::Json).unwrap();
    let node_tree = transform(&user_record(), Backend::Node).unwrap();
    assert_eq!(json_tree, node_tree);
    assert_eq!(json_tree, expected_tree());
}

#[test]
fn result_is_independent_of_field_declaration_order() {
    let ordered = user_record();
    let mut fields: Vec<Field> = ordered.fields().to_vec();
    fields.reverse();
    let reversed = fields.into_iter().fold(Payload::new(), Payload::field);

    for backend in Backend::ALL {
        assert_eq!(
            transform(&ordered, backend).unwrap(),
            transform(&reversed, backend).unwrap()
        );
    }
}

#[test]
fn clean_prefix_strips_only_the_declared_prefix() {
    let payload = Payload::new()
        .field(
            Field::scalar("user_id", "u-1").directive(Directive::CleanPrefix("user_".to_string())),
        )
        .field(Field::scalar("name", "plain"));
    for backend in Backend::ALL {
        let tree = transform(&payload, backend).unwrap();
        assert_eq!(tree, json!({"id": "u-1", "name": "plain"}));
    }
}

#[test]
fn upper_case_applies_to_value_never_to_path() {
    let payload = Payload::new().field(
        Field::scalar("name", "John").directive(Directive::CaseTransform(CaseMode::Upper)),
    );
    for backend in Backend::ALL {
        let tree = transform(&payload, backend).unwrap();
        assert_eq!(tree, json!({"name": "JOHN"}));
        assert!(tree.get("NAME").is_none());
    }
}

#[test]
fn nested_path_wins_over_name_and_siblings() {
    let payload = Payload::new()
        .field(Field::scalar("first", 1i64))
        .field(
            Field::scalar("anything_at_all", "routed")
                .directive(Directive::NestedPath("address.home.tag".to_string())),
        )
        .field(Field::scalar("last", 2i64));
    for backend in Backend::ALL {
        let tree = transform(&payload, backend).unwrap();
        assert_eq!(tree["address"]["home"]["tag"], "routed");
        assert!(tree.get("anything_at_all").is_none());
    }
}

#[test]
fn null_with_default_is_present_not_omitted() {
    let payload = Payload::new().field(
        Field::scalar("nickname", Scalar::Null)
            .directive(Directive::DefaultValue(Scalar::from("N/A"))),
    );
    for backend in Backend::ALL {
        let tree = transform(&payload, backend).unwrap();
        assert_eq!(tree, json!({"nickname": "N/A"}));
    }
}

#[test]
fn null_without_default_stays_null() {
    let payload = Payload::new().field(Field::scalar("nickname", Scalar::Null));
    for backend in Backend::ALL {
        let tree = transform(&payload, backend).unwrap();
        assert_eq!(tree, json!({"nickname": null}));
    }
}

#[test]
fn flat_payload_yields_no_nested_nodes() {
    let payload = Payload::new()
        .field(Field::scalar("a", 1i64))
        .field(Field::scalar("b", "two"))
        .field(Field::scalar("c", false));
    for backend in Backend::ALL {
        let tree = transform(&payload, backend).unwrap();
        assert!(tree.as_object().unwrap().values().all(|v| !v.is_object()));
    }
}

#[test]
fn conflicting_overrides_fail_on_both_backends() {
    let payload = Payload::new()
        .field(Field::scalar("a", 1i64).directive(Directive::NestedPath("slot".to_string())))
        .field(Field::scalar("b", 2i64).directive(Directive::NestedPath("slot".to_string())));
    for backend in Backend::ALL {
        let err = transform(&payload, backend).unwrap_err();
        assert!(matches!(err, remold_core::Error::PathConflict { .. }));
    }
}

#[test]
fn top_level_key_order_follows_first_insertion() {
    let tree = transform(&user_record(), Backend::Json).unwrap();
    let keys: Vec<&String> = tree.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["id", "name", "email", "nickname", "address", "audit", "orders"]
    );
}
