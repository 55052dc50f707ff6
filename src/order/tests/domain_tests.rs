//! Domain tests for order records, drafts and identifiers.

use super::{days_from_today, today};
use crate::order::domain::{
    ActionType, ContainerNumber, Order, OrderDomainError, OrderDraft, OrderId, OrderStatus,
    parse_container_list,
};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;

fn wire_order() -> serde_json::Value {
    json!({
        "id": "ord-7",
        "documentNumber": "DN-7",
        "customer": "Harbour Ltd",
        "agent": "Sam",
        "address": "3 Dock Lane",
        "actionType": "pickup",
        "containers": "TCKU1, TCKU2 ,, TCKU3",
        "createdOn": "2026-03-01T08:30:00Z",
        "expectedFinishOn": "2026-03-10",
        "finishedOn": "",
        "notes": null,
        "status": "overdue"
    })
}

#[rstest]
fn wire_record_decodes_lenient_fields() {
    let order: Order = serde_json::from_value(wire_order()).expect("record should decode");

    assert_eq!(order.id().as_str(), "ord-7");
    assert_eq!(order.status(), OrderStatus::Overdue);
    assert_eq!(order.containers_text(), "TCKU1, TCKU2, TCKU3");
    assert_eq!(order.created_on(), NaiveDate::from_ymd_opt(2026, 3, 1));
    assert_eq!(order.expected_finish_on(), NaiveDate::from_ymd_opt(2026, 3, 10));
    assert!(order.finished_on().is_none());
    assert!(order.notes().is_none());
}

#[rstest]
fn wire_record_accepts_container_list() {
    let mut value = wire_order();
    value["containers"] = json!(["A1", "B2"]);

    let order: Order = serde_json::from_value(value).expect("record should decode");

    assert_eq!(order.containers().len(), 2);
}

#[rstest]
#[case("unexpected", json!("field"))]
#[case("status", json!("lost"))]
#[case("createdOn", json!("yesterday"))]
fn wire_record_rejects_unknown_or_malformed_fields(
    #[case] key: &str,
    #[case] value: serde_json::Value,
) {
    let mut record = wire_order();
    record[key] = value;

    assert!(serde_json::from_value::<Order>(record).is_err());
}

#[rstest]
#[case(OrderStatus::Overdue, -3, 3)]
#[case(OrderStatus::Overdue, 0, 0)]
#[case(OrderStatus::Overdue, 4, 0)]
#[case(OrderStatus::Open, -3, 0)]
#[case(OrderStatus::InTreatment, -9, 0)]
fn overdue_days_only_count_for_overdue_orders(
    #[case] status: OrderStatus,
    #[case] offset: i64,
    #[case] expected: u32,
) {
    let order = Order::new(OrderId::new("1").expect("valid id"), ActionType::Pickup, status)
        .with_expected_finish_on(days_from_today(offset));

    assert_eq!(order.overdue_days(today()), expected);
}

#[rstest]
fn overdue_without_expected_date_counts_zero() {
    let order = Order::new(
        OrderId::new("1").expect("valid id"),
        ActionType::Pickup,
        OrderStatus::Overdue,
    );

    assert_eq!(order.overdue_days(today()), 0);
}

#[rstest]
fn close_rejects_closed_orders_and_early_finish() {
    let id = OrderId::new("1").expect("valid id");
    let closed = Order::new(id.clone(), ActionType::Pickup, OrderStatus::Closed);
    let open = Order::new(id.clone(), ActionType::Pickup, OrderStatus::Open)
        .with_created_on(today());

    assert_eq!(
        closed.ensure_can_close(today()),
        Err(OrderDomainError::AlreadyClosed(id))
    );
    assert!(matches!(
        open.ensure_can_close(days_from_today(-1)),
        Err(OrderDomainError::FinishBeforeCreation { .. })
    ));
    assert!(open.ensure_can_close(today()).is_ok());
}

#[rstest]
fn draft_validation_lists_every_missing_field() {
    let draft = OrderDraft {
        customer: "Harbour Ltd".to_owned(),
        ..OrderDraft::new()
    };

    assert_eq!(
        draft.validate(),
        Err(OrderDomainError::MissingFields(vec![
            "documentNumber",
            "address",
            "actionType"
        ]))
    );
}

#[rstest]
fn duplicate_clears_document_and_reopens() {
    let source: Order = serde_json::from_value(wire_order()).expect("record should decode");

    let draft = OrderDraft::duplicate_of(&source);

    assert!(draft.document_number.is_empty());
    assert_eq!(draft.status, OrderStatus::Open);
    assert_eq!(draft.customer, "Harbour Ltd");
    assert_eq!(draft.containers, source.containers());
}

#[rstest]
fn draft_serialises_camel_case_without_identity() {
    let mut draft = OrderDraft::new();
    draft.document_number = "DN-1".to_owned();
    draft.action_type = Some(ActionType::DropOff);
    draft.set_containers_from_text("C1,C2");

    let encoded = serde_json::to_value(&draft).expect("draft should encode");

    assert_eq!(encoded["documentNumber"], json!("DN-1"));
    assert_eq!(encoded["actionType"], json!("drop_off"));
    assert_eq!(encoded["containers"], json!(["C1", "C2"]));
    assert!(encoded.get("id").is_none());
}

#[rstest]
fn container_list_trims_and_skips_blanks() {
    let parsed = parse_container_list(" A1 ,, B2,  ");

    assert_eq!(
        parsed,
        vec![
            ContainerNumber::new("A1").expect("valid"),
            ContainerNumber::new("B2").expect("valid"),
        ]
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_identifiers_are_rejected(#[case] raw: &str) {
    assert_eq!(OrderId::new(raw), Err(OrderDomainError::EmptyOrderId));
    assert_eq!(
        ContainerNumber::new(raw),
        Err(OrderDomainError::EmptyContainerNumber)
    );
}

#[rstest]
fn status_round_trips_through_str() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::try_from(status.as_str()), Ok(status));
    }
    assert!(OrderStatus::try_from("lost").is_err());
}
