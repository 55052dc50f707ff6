//! Given steps for order desk BDD scenarios.

use super::world::{DeskWorld, parse_status};
use crate::test_helpers::{confirmed, sample_order};
use containerdesk::order::{
    domain::{ActionType, OrderDraft},
    ports::OrderStore,
};
use containerdesk::remote::domain::RemoteResponse;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an order "{id}" in status "{status}""#)]
fn stored_order(world: &mut DeskWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let order = sample_order(&id, parse_status(&status)?);
    world
        .store
        .upsert(order)
        .wrap_err("seed order for scenario")?;
    Ok(())
}

#[given(r#"the server will confirm order "{id}" as "{status}""#)]
fn server_confirms(world: &mut DeskWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let record = sample_order(&id, parse_status(&status)?);
    world.transport.push_response(confirmed(&record));
    Ok(())
}

#[given(r#"the server will reject the next call with "{message}""#)]
fn server_rejects(world: &mut DeskWorld, message: String) {
    world.transport.push_response(RemoteResponse::failure(message));
}

#[given("the server will accept the next call")]
fn server_accepts(world: &mut DeskWorld) {
    world.transport.push_response(RemoteResponse::empty_success());
}

#[given("the server is rate limited")]
fn server_rate_limited(world: &mut DeskWorld) {
    world
        .transport
        .push_repeated(&RemoteResponse::too_many_requests(), 10);
}

#[given(r#"a draft for customer "{customer}" with document "{document}""#)]
fn complete_draft(world: &mut DeskWorld, customer: String, document: String) {
    world.draft = Some(OrderDraft {
        document_number: document,
        customer,
        address: "9 Pier Street".to_owned(),
        action_type: Some(ActionType::DropOff),
        ..OrderDraft::new()
    });
}

#[given(r#"a draft for customer "{customer}" without a document number"#)]
fn draft_without_document(world: &mut DeskWorld, customer: String) {
    world.draft = Some(OrderDraft {
        customer,
        address: "9 Pier Street".to_owned(),
        action_type: Some(ActionType::DropOff),
        ..OrderDraft::new()
    });
}
