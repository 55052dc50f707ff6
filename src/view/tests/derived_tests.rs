//! Counter, inventory, deadline and autocomplete tests.

use super::{containers, days_from_today, order, today};
use crate::order::domain::{ActionType, ContainerNumber, Order, OrderId, OrderStatus};
use crate::view::{
    AutocompleteIndex, ContainerAvailability, ContainerInventory, DashboardCounters,
    SuggestField, upcoming_deadlines,
};
use rstest::{fixture, rstest};

fn drop_off(id: &str, status: OrderStatus) -> Order {
    Order::new(OrderId::new(id).expect("valid id"), ActionType::DropOff, status)
        .with_customer("Customer 1")
}

fn number(text: &str) -> ContainerNumber {
    ContainerNumber::new(text).expect("valid container")
}

#[fixture]
fn yard() -> Vec<Order> {
    vec![
        order("1", OrderStatus::Open).with_containers(containers(&["C-1", "C-2"])),
        order("2", OrderStatus::PendingInvalid),
        order("3", OrderStatus::Overdue).with_containers(containers(&["C-3"])),
        order("4", OrderStatus::Closed)
            .with_containers(containers(&["C-4", "C-2"]))
            .with_finished_on(days_from_today(-20)),
        order("5", OrderStatus::Closed)
            .with_containers(containers(&["C-4"]))
            .with_finished_on(days_from_today(-2)),
        drop_off("6", OrderStatus::Open).with_containers(containers(&["C-5"])),
    ]
}

#[rstest]
fn counters_follow_status_and_action_rules(yard: Vec<Order>) {
    let counters = DashboardCounters::compute(&yard);

    assert_eq!(counters.open_orders, 3);
    assert_eq!(counters.overdue_orders, 1);
    assert_eq!(counters.in_use_containers, 3);
    assert_eq!(counters.customers, 5);
}

#[rstest]
fn inventory_splits_in_use_and_available(yard: Vec<Order>) {
    let inventory = ContainerInventory::compute(&yard, &[number("C-100")]);

    let in_use: Vec<&str> = inventory.in_use.iter().map(|row| row.number.as_str()).collect();
    let available: Vec<&str> = inventory
        .available
        .iter()
        .map(|row| row.number.as_str())
        .collect();
    assert_eq!(in_use, vec!["C-1", "C-2", "C-3"]);
    assert_eq!(available, vec!["C-4", "C-5", "C-100"]);
    assert_eq!(inventory.total(), 6);
}

#[rstest]
fn available_container_reports_most_recent_closed_order(yard: Vec<Order>) {
    let inventory = ContainerInventory::compute(&yard, &[]);

    let row = inventory
        .available
        .iter()
        .find(|row| row.number.as_str() == "C-4")
        .expect("C-4 available");
    assert_eq!(row.last_finished_on, Some(days_from_today(-2)));
    assert_eq!(row.last_document_number.as_deref(), Some("DOC-5"));
}

#[rstest]
fn registered_container_is_available_without_history() {
    let inventory = ContainerInventory::compute(&[], &[number("C-100")]);

    assert_eq!(
        inventory.availability(&number("C-100")),
        Some(ContainerAvailability::Available)
    );
    let row = inventory.available.first().expect("one row");
    assert!(row.last_finished_on.is_none());
    assert!(row.last_document_number.is_none());
}

#[rstest]
fn registered_container_in_use_is_not_listed_twice(yard: Vec<Order>) {
    let inventory = ContainerInventory::compute(&yard, &[number("C-1")]);

    assert_eq!(
        inventory.availability(&number("C-1")),
        Some(ContainerAvailability::InUse)
    );
    assert_eq!(inventory.total(), 5);
}

#[rstest]
fn deadlines_list_open_orders_inside_horizon() {
    let records = vec![
        order("today", OrderStatus::Open).with_expected_finish_on(today()),
        order("three", OrderStatus::Open).with_expected_finish_on(days_from_today(3)),
        order("four", OrderStatus::Open).with_expected_finish_on(days_from_today(4)),
        order("past", OrderStatus::Open).with_expected_finish_on(days_from_today(-1)),
        order("closed", OrderStatus::Closed).with_expected_finish_on(days_from_today(1)),
        order("undated", OrderStatus::Open),
    ];

    let alerts = upcoming_deadlines(&records, today(), 3);

    let listed: Vec<(&str, u32)> = alerts
        .iter()
        .map(|alert| (alert.order.id().as_str(), alert.days_remaining))
        .collect();
    assert_eq!(listed, vec![("today", 0), ("three", 3)]);
}

#[rstest]
fn autocomplete_deduplicates_and_splits_containers(yard: Vec<Order>) {
    let mut records = yard;
    records.push(
        order("7", OrderStatus::Open)
            .with_customer("  Customer 1  ")
            .with_containers(vec![number("C-9, C-1")]),
    );

    let index = AutocompleteIndex::build(&records, &[number("C-100")]);

    assert_eq!(index.values(SuggestField::Customer).len(), 5);
    let container_values: Vec<&str> = index
        .values(SuggestField::Container)
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(
        container_values,
        vec!["C-1", "C-2", "C-3", "C-4", "C-5", "C-9", "C-100"]
    );
}

#[rstest]
#[case("cust", 5)]
#[case("CUSTOMER 5", 1)]
#[case("", 0)]
#[case("zzz", 0)]
fn suggestions_are_case_insensitive_and_capped(
    yard: Vec<Order>,
    #[case] input: &str,
    #[case] expected: usize,
) {
    let extra: Vec<Order> = (10..20)
        .map(|index| order(&index.to_string(), OrderStatus::Open))
        .collect();
    let records: Vec<Order> = yard.into_iter().chain(extra).collect();
    let index = AutocompleteIndex::build(&records, &[]);

    let suggestions = index.suggest(SuggestField::Customer, input, 5);

    assert_eq!(suggestions.len(), expected);
}
