//! Unit tests for the order context.

mod domain_tests;

use crate::order::{
    adapters::memory::{InMemoryOrderStore, RecordingNotifier},
    domain::{ActionType, Order, OrderId, OrderStatus},
    services::{DeskConfig, OrderDesk},
};
use crate::remote::{
    adapters::{RecordingSleeper, ScriptedTransport},
    domain::RemoteResponse,
    services::ResilientClient,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Clock pinned to noon UTC on a fixed date.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub(super) fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("valid time");
        Self {
            now: Utc.from_utc_datetime(&noon),
        }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + chrono::Duration::days(days)
}

pub(super) type TestDesk = OrderDesk<InMemoryOrderStore, RecordingNotifier, FixedClock>;

/// Desk wired to in-memory adapters, with handles on each of them.
pub(super) struct DeskHarness {
    pub(super) desk: TestDesk,
    pub(super) store: InMemoryOrderStore,
    pub(super) transport: ScriptedTransport,
    pub(super) notifier: RecordingNotifier,
    pub(super) sleeper: RecordingSleeper,
}

pub(super) fn desk_with(orders: Vec<Order>) -> DeskHarness {
    let store = InMemoryOrderStore::with_orders(orders).expect("distinct ids");
    let transport = ScriptedTransport::new();
    let notifier = RecordingNotifier::new();
    let sleeper = RecordingSleeper::new();
    let config = DeskConfig::default();
    let client = ResilientClient::with_sleeper(
        Arc::new(transport.clone()),
        Arc::new(sleeper.clone()),
        config.retry,
    );
    let desk = OrderDesk::with_client(
        Arc::new(store.clone()),
        client,
        Arc::new(notifier.clone()),
        Arc::new(FixedClock::on(today())),
        config,
    );
    DeskHarness {
        desk,
        store,
        transport,
        notifier,
        sleeper,
    }
}

pub(super) fn order_id(raw: &str) -> OrderId {
    OrderId::new(raw).expect("valid id")
}

pub(super) fn sample_order(id: &str, status: OrderStatus) -> Order {
    Order::new(order_id(id), ActionType::Pickup, status)
        .with_document_number(format!("DN-{id}"))
        .with_customer("Harbour Ltd")
        .with_address("3 Dock Lane")
        .with_created_on(days_from_today(-10))
        .with_expected_finish_on(days_from_today(-2))
}

/// Server success response carrying `order` as its payload.
pub(super) fn confirmed(order: &Order) -> RemoteResponse {
    RemoteResponse::success(serde_json::to_value(order).expect("order should encode"))
}
