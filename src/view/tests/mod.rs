//! Unit tests for view derivation.

mod board_tests;
mod derived_tests;

use crate::order::domain::{ActionType, ContainerNumber, Order, OrderId, OrderStatus};
use chrono::NaiveDate;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + chrono::Duration::days(days)
}

pub(super) fn order(id: &str, status: OrderStatus) -> Order {
    Order::new(
        OrderId::new(id).expect("valid id"),
        ActionType::Pickup,
        status,
    )
    .with_customer(format!("Customer {id}"))
    .with_document_number(format!("DOC-{id}"))
    .with_address("1 Quay Road")
}

pub(super) fn containers(numbers: &[&str]) -> Vec<ContainerNumber> {
    numbers
        .iter()
        .map(|number| ContainerNumber::new(*number).expect("valid container"))
        .collect()
}
