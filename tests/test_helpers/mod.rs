//! Shared fixtures for order desk integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use containerdesk::{
    order::{
        adapters::memory::{InMemoryOrderStore, RecordingNotifier},
        domain::{ActionType, Order, OrderId, OrderStatus},
        services::{DeskConfig, OrderDesk},
    },
    remote::{
        adapters::{RecordingSleeper, ScriptedTransport},
        domain::RemoteResponse,
        services::ResilientClient,
    },
};
use mockable::Clock;

/// Clock pinned to noon UTC on [`today`].
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl Default for FixedClock {
    fn default() -> Self {
        let noon = today()
            .and_hms_opt(12, 0, 0)
            .expect("noon is a valid time");
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

/// Date every scenario treats as today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

/// Desk type used by integration tests.
pub type TestDesk = OrderDesk<InMemoryOrderStore, RecordingNotifier, FixedClock>;

/// Desk plus handles on the adapters it was built from.
pub struct DeskParts {
    pub desk: TestDesk,
    pub store: InMemoryOrderStore,
    pub transport: ScriptedTransport,
    pub notifier: RecordingNotifier,
}

/// Builds an empty desk over in-memory adapters with instant backoff.
pub fn build_desk() -> DeskParts {
    let store = InMemoryOrderStore::new();
    let transport = ScriptedTransport::new();
    let notifier = RecordingNotifier::new();
    let config = DeskConfig::default();
    let client = ResilientClient::with_sleeper(
        Arc::new(transport.clone()),
        Arc::new(RecordingSleeper::new()),
        config.retry,
    );
    let desk = OrderDesk::with_client(
        Arc::new(store.clone()),
        client,
        Arc::new(notifier.clone()),
        Arc::new(FixedClock::default()),
        config,
    );
    DeskParts {
        desk,
        store,
        transport,
        notifier,
    }
}

/// Complete pickup order created ten days ago.
pub fn sample_order(id: &str, status: OrderStatus) -> Order {
    let created = today() - chrono::Duration::days(10);
    Order::new(
        OrderId::new(id).expect("valid id"),
        ActionType::Pickup,
        status,
    )
    .with_document_number(format!("DN-{id}"))
    .with_customer("Harbour Ltd")
    .with_address("3 Dock Lane")
    .with_created_on(created)
}

/// Success response carrying `order` as the server record.
pub fn confirmed(order: &Order) -> RemoteResponse {
    RemoteResponse::success(serde_json::to_value(order).expect("order should encode"))
}
