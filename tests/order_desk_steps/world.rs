//! Shared world state for order desk BDD scenarios.

use crate::test_helpers::{DeskParts, TestDesk, build_desk};
use containerdesk::order::{
    adapters::memory::{InMemoryOrderStore, RecordingNotifier},
    domain::{KanbanColumn, OrderDraft, OrderId, OrderStatus},
    services::DeskError,
};
use containerdesk::remote::adapters::ScriptedTransport;
use rstest::fixture;

/// Scenario world for order desk behaviour tests.
pub struct DeskWorld {
    pub desk: TestDesk,
    pub store: InMemoryOrderStore,
    pub transport: ScriptedTransport,
    pub notifier: RecordingNotifier,
    pub draft: Option<OrderDraft>,
    pub last_result: Option<Result<(), DeskError>>,
}

impl DeskWorld {
    /// Creates a world around an empty desk.
    #[must_use]
    pub fn new() -> Self {
        let DeskParts {
            desk,
            store,
            transport,
            notifier,
        } = build_desk();
        Self {
            desk,
            store,
            transport,
            notifier,
            draft: None,
            last_result: None,
        }
    }

    /// Records the outcome of the step's operation.
    pub fn record<T>(&mut self, result: Result<T, DeskError>) {
        self.last_result = Some(result.map(|_| ()));
    }
}

impl Default for DeskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DeskWorld {
    DeskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an order identifier written in a scenario.
pub fn parse_id(raw: &str) -> Result<OrderId, eyre::Report> {
    OrderId::new(raw).map_err(|err| eyre::eyre!("invalid order id in scenario: {err}"))
}

/// Parses a wire status written in a scenario.
pub fn parse_status(raw: &str) -> Result<OrderStatus, eyre::Report> {
    OrderStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Parses a board column named by its status.
pub fn parse_column(raw: &str) -> Result<KanbanColumn, eyre::Report> {
    let status = parse_status(raw)?;
    KanbanColumn::for_status(status)
        .ok_or_else(|| eyre::eyre!("status {raw} has no board column"))
}
