//! Then steps for order desk BDD scenarios.

use super::world::{DeskWorld, parse_column, parse_id, parse_status};
use containerdesk::order::{
    domain::ContainerNumber,
    ports::{OrderStore, Severity},
    services::DeskError,
};
use containerdesk::view::ContainerAvailability;
use rstest_bdd_macros::then;

#[then("the operation succeeds")]
fn operation_succeeds(world: &DeskWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected success, got {other:?}")),
    }
}

#[then("the operation fails with a validation error")]
fn fails_with_validation(world: &DeskWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(DeskError::Validation(_))) => Ok(()),
        other => Err(eyre::eyre!("expected validation error, got {other:?}")),
    }
}

#[then("the operation fails with a remote error")]
fn fails_with_remote(world: &DeskWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(DeskError::Remote(_))) => Ok(()),
        other => Err(eyre::eyre!("expected remote error, got {other:?}")),
    }
}

#[then(r#"order "{id}" is stored with status "{status}""#)]
fn stored_with_status(world: &DeskWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let stored = world
        .store
        .get(&parse_id(&id)?)
        .map_err(|err| eyre::eyre!("store read failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("order {id} is not stored"))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"the board shows order "{id}" in "{column}""#)]
fn board_shows(world: &DeskWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let view = world
        .desk
        .view()
        .map_err(|err| eyre::eyre!("view derivation failed: {err}"))?;
    let actual = view.board.column_of(&parse_id(&id)?);
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected card in {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("a success notification is shown")]
fn success_shown(world: &DeskWorld) -> Result<(), eyre::Report> {
    if world.notifier.with_severity(Severity::Success).len() != 1 {
        return Err(eyre::eyre!(
            "expected one success notification, got {:?}",
            world.notifier.notifications()
        ));
    }
    Ok(())
}

#[then(r#"an error notification reads "{message}""#)]
fn error_reads(world: &DeskWorld, message: String) -> Result<(), eyre::Report> {
    let errors = world.notifier.with_severity(Severity::Error);
    if !errors.iter().any(|note| note.message == message) {
        return Err(eyre::eyre!("no error notification reading {message:?}: {errors:?}"));
    }
    Ok(())
}

#[then("no notification is shown")]
fn no_notification(world: &DeskWorld) -> Result<(), eyre::Report> {
    let received = world.notifier.notifications();
    if !received.is_empty() {
        return Err(eyre::eyre!("unexpected notifications: {received:?}"));
    }
    Ok(())
}

#[then("the server was called {count:usize} times")]
fn server_called(world: &DeskWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.transport.call_count();
    if actual != count {
        return Err(eyre::eyre!("expected {count} remote calls, got {actual}"));
    }
    Ok(())
}

#[then(r#"container "{number}" is available"#)]
fn container_available(world: &DeskWorld, number: String) -> Result<(), eyre::Report> {
    let container = ContainerNumber::new(number)
        .map_err(|err| eyre::eyre!("invalid container in scenario: {err}"))?;
    let view = world
        .desk
        .view()
        .map_err(|err| eyre::eyre!("view derivation failed: {err}"))?;
    match view.inventory.availability(&container) {
        Some(ContainerAvailability::Available) => Ok(()),
        other => Err(eyre::eyre!("expected available container, got {other:?}")),
    }
}

#[then(r#"the last request carried finish date "{date}""#)]
fn last_request_finish_date(world: &DeskWorld, date: String) -> Result<(), eyre::Report> {
    let requests = world.transport.requests();
    let last = requests
        .last()
        .ok_or_else(|| eyre::eyre!("no request was sent"))?;
    let sent = last.field("finishDate").and_then(serde_json::Value::as_str);
    if sent != Some(date.as_str()) {
        return Err(eyre::eyre!("expected finish date {date}, sent {sent:?}"));
    }
    Ok(())
}
