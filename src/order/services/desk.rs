//! Order desk: the single entry point for reads, edit sessions and
//! mutations of the order record store.

use super::{BusyRecords, DeskConfig, DeskError, DeskResult, requests};
use crate::order::{
    domain::{EditSession, Order, OrderDraft, OrderId},
    ports::{Notification, Notifier, OrderStore, Severity},
};
use crate::remote::{ports::RemoteTransport, services::ResilientClient};
use crate::view::{
    AutocompleteIndex, DashboardView, DerivationInput, SuggestField, ViewIntent, ViewState,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard};

/// Mutable desk state shared by every operation.
#[derive(Debug, Default)]
pub(super) struct DeskState {
    view_state: ViewState,
    session: Option<EditSession>,
    autocomplete: Option<(u64, AutocompleteIndex)>,
    loaded: bool,
}

/// Coordinates the record store, the remote client and the derived views.
///
/// The record store is only written here, and only with records confirmed by
/// the server. A failed remote call leaves the store as it was, so the next
/// view derivation reverts any optimistic presentation.
pub struct OrderDesk<S, N, C>
where
    S: OrderStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    pub(super) store: Arc<S>,
    pub(super) client: ResilientClient,
    pub(super) notifier: Arc<N>,
    pub(super) clock: Arc<C>,
    pub(super) config: DeskConfig,
    pub(super) busy: BusyRecords,
    state: Mutex<DeskState>,
}

impl<S, N, C> OrderDesk<S, N, C>
where
    S: OrderStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a desk whose client follows `config.retry`.
    #[must_use]
    pub fn new(
        store: Arc<S>,
        transport: Arc<dyn RemoteTransport>,
        notifier: Arc<N>,
        clock: Arc<C>,
        config: DeskConfig,
    ) -> Self {
        let client = ResilientClient::new(transport, config.retry);
        Self::with_client(store, client, notifier, clock, config)
    }

    /// Creates a desk around a prepared client.
    #[must_use]
    pub fn with_client(
        store: Arc<S>,
        client: ResilientClient,
        notifier: Arc<N>,
        clock: Arc<C>,
        config: DeskConfig,
    ) -> Self {
        Self {
            store,
            client,
            notifier,
            clock,
            config,
            busy: BusyRecords::default(),
            state: Mutex::new(DeskState::default()),
        }
    }

    fn lock_state(&self) -> DeskResult<MutexGuard<'_, DeskState>> {
        self.state.lock().map_err(DeskError::poisoned)
    }

    pub(super) fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    pub(super) fn notify(&self, severity: Severity, message: impl Into<String>) {
        self.notifier.notify(Notification {
            message: message.into(),
            severity,
            duration: self.config.notification.duration(),
        });
    }

    pub(super) fn report(&self, err: &DeskError) {
        tracing::warn!(error = %err, "order desk operation failed");
        self.notify(err.severity(), err.user_message());
    }

    pub(super) fn require(&self, id: &OrderId) -> DeskResult<Order> {
        self.store
            .get(id)?
            .ok_or_else(|| DeskError::NotFound(id.clone()))
    }

    pub(super) fn commit(&self, order: Order) -> DeskResult<()> {
        let order_id = order.id().clone();
        self.store.upsert(order)?;
        tracing::info!(%order_id, "committed server record");
        Ok(())
    }

    /// Returns the desk configuration.
    #[must_use]
    pub const fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Returns `true` while any remote call is unsettled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.client.loading().is_loading()
    }

    /// Returns `true` once a full refresh has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the desk state is unusable.
    pub fn is_loaded(&self) -> DeskResult<bool> {
        Ok(self.lock_state()?.loaded)
    }

    /// Replaces the record store with the server's full order list.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InitialLoad`] wrapping the cause of any failure
    /// while no refresh has succeeded yet. Later refresh failures are returned
    /// as [`DeskError::Remote`] or [`DeskError::Store`]. The store is left
    /// untouched on failure.
    pub async fn refresh_all(&self) -> DeskResult<DashboardView> {
        self.reload().await.inspect_err(|err| self.report(err))?;
        self.view()
    }

    async fn reload(&self) -> DeskResult<()> {
        let loaded = self.lock_state()?.loaded;
        self.replace_from_server().await.map_err(|err| {
            if loaded {
                err
            } else {
                DeskError::InitialLoad(Box::new(err))
            }
        })
    }

    async fn replace_from_server(&self) -> DeskResult<()> {
        let fetched: Option<Vec<Order>> =
            self.client.call_decoded(&requests::list_orders()).await?;
        let orders = fetched.unwrap_or_default();
        let count = orders.len();
        self.store.replace_all(orders)?;
        self.lock_state()?.loaded = true;
        tracing::info!(count, "record store replaced from full refresh");
        Ok(())
    }

    /// Derives every view from the current store contents.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the store or desk state is unusable.
    pub fn view(&self) -> DeskResult<DashboardView> {
        let snapshot = self.store.snapshot()?;
        let pending_moves = self.busy.pending_moves()?;
        let today = self.today();
        let mut state = self.lock_state()?;
        let view = DashboardView::derive(
            DerivationInput {
                orders: &snapshot.orders,
                registered_containers: &snapshot.registered_containers,
                pending_moves: &pending_moves,
                state: &state.view_state,
                config: &self.config.view,
                today,
            },
            snapshot.revision,
        );
        state.view_state.clamp_page(view.table.total_pages);
        Ok(view)
    }

    /// Returns a copy of the table state.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the desk state is unusable.
    pub fn view_state(&self) -> DeskResult<ViewState> {
        Ok(self.lock_state()?.view_state.clone())
    }

    /// Applies a presentation event and returns the refreshed view.
    ///
    /// A dropped card goes through [`OrderDesk::update_kanban_status`];
    /// its failure is already notified, and the returned view shows the
    /// card back in its confirmed column.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the store or desk state is unusable.
    pub async fn apply_view_intent(&self, intent: &ViewIntent) -> DeskResult<DashboardView> {
        if let ViewIntent::CardDropped { order_id, column } = intent {
            if let Err(err) = self.update_kanban_status(order_id, *column).await {
                tracing::debug!(error = %err, "card drop not applied");
            }
            return self.view();
        }
        let current = self.view()?;
        self.lock_state()?
            .view_state
            .apply(intent, current.table.total_pages);
        self.view()
    }

    /// Returns the stored order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when the order is not stored.
    pub fn order(&self, id: &OrderId) -> DeskResult<Order> {
        self.require(id)
    }

    /// Returns up to the configured number of autocomplete suggestions.
    ///
    /// The index is rebuilt only when the store changed since last use.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the store or desk state is unusable.
    pub fn suggest(&self, field: SuggestField, input: &str) -> DeskResult<Vec<String>> {
        let snapshot = self.store.snapshot()?;
        let mut state = self.lock_state()?;
        let stale = state
            .autocomplete
            .as_ref()
            .is_none_or(|(revision, _)| *revision != snapshot.revision);
        if stale {
            let index =
                AutocompleteIndex::build(&snapshot.orders, &snapshot.registered_containers);
            state.autocomplete = Some((snapshot.revision, index));
        }
        Ok(state
            .autocomplete
            .as_ref()
            .map(|(_, index)| index.suggest(field, input, self.config.view.suggestion_limit))
            .unwrap_or_default())
    }

    /// Starts a session for a new order, discarding any unsaved session.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the desk state is unusable.
    pub fn begin_add(&self) -> DeskResult<OrderDraft> {
        self.start_session(EditSession::add())
    }

    /// Starts a session editing `id`, discarding any unsaved session.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when the order is not stored.
    pub fn begin_edit(&self, id: &OrderId) -> DeskResult<OrderDraft> {
        let order = self.require(id).inspect_err(|err| self.report(err))?;
        self.start_session(EditSession::edit(&order))
    }

    /// Starts a session cloning `id` into a new open order.
    ///
    /// No remote call is made until the session is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when the source order is not stored.
    pub fn begin_duplicate(&self, id: &OrderId) -> DeskResult<OrderDraft> {
        let source = self.require(id).inspect_err(|err| self.report(err))?;
        self.start_session(EditSession::duplicate(&source))
    }

    fn start_session(&self, session: EditSession) -> DeskResult<OrderDraft> {
        let draft = session.draft().clone();
        let mut state = self.lock_state()?;
        if let Some(previous) = state.session.replace(session) {
            tracing::debug!(mode = ?previous.mode(), "discarded unsaved edit session");
        }
        Ok(draft)
    }

    /// Returns the active edit session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the desk state is unusable.
    pub fn session(&self) -> DeskResult<Option<EditSession>> {
        Ok(self.lock_state()?.session.clone())
    }

    /// Edits the active draft in place and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoEditSession`] when no session is active.
    pub fn update_session(&self, edit: impl FnOnce(&mut OrderDraft)) -> DeskResult<OrderDraft> {
        let mut state = self.lock_state()?;
        let session = state.session.as_mut().ok_or(DeskError::NoEditSession)?;
        edit(session.draft_mut());
        Ok(session.draft().clone())
    }

    /// Appends a predefined note as a new `- note` line of the draft.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoEditSession`] when no session is active.
    pub fn append_predefined_note(&self, note: &str) -> DeskResult<OrderDraft> {
        self.update_session(|draft| draft.append_note(note))
    }

    /// Drops the active session, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Store`] when the desk state is unusable.
    pub fn discard_session(&self) -> DeskResult<Option<EditSession>> {
        Ok(self.lock_state()?.session.take())
    }

    /// Submits the active session as an add or an edit.
    ///
    /// The session is closed only when the server confirms the change, so a
    /// failed submission can be corrected and retried.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NoEditSession`] when no session is active and
    /// the errors of [`OrderDesk::add_order`] or [`OrderDesk::edit_order`].
    pub async fn submit_session(&self) -> DeskResult<Order> {
        let submitted = self
            .lock_state()?
            .session
            .clone()
            .ok_or(DeskError::NoEditSession)
            .inspect_err(|err| self.report(err))?;
        let (mode, draft) = submitted.clone().into_parts();

        let saved = match mode.target() {
            Some(id) => self.edit_order(id, &draft).await?,
            None => self.add_order(&draft).await?,
        };

        let mut state = self.lock_state()?;
        if state.session.as_ref() == Some(&submitted) {
            state.session = None;
        }
        Ok(saved)
    }
}
