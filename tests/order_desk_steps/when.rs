//! When steps for order desk BDD scenarios.

use super::world::{DeskWorld, parse_column, parse_id, run_async};
use crate::test_helpers::today;
use rstest_bdd_macros::when;

#[when(r#"the card for order "{id}" is dropped on "{column}""#)]
fn card_dropped(world: &mut DeskWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let order_id = parse_id(&id)?;
    let target = parse_column(&column)?;
    let result = run_async(world.desk.update_kanban_status(&order_id, target));
    world.record(result);
    Ok(())
}

#[when("the draft is submitted as a new order")]
fn submit_draft(world: &mut DeskWorld) -> Result<(), eyre::Report> {
    let draft = world
        .draft
        .clone()
        .ok_or_else(|| eyre::eyre!("missing draft in scenario world"))?;
    let result = run_async(world.desk.add_order(&draft));
    world.record(result);
    Ok(())
}

#[when(r#"container "{number}" is registered"#)]
fn register_container(world: &mut DeskWorld, number: String) {
    let result = run_async(world.desk.add_container(&number));
    world.record(result);
}

#[when(r#"order "{id}" is closed today"#)]
fn close_today(world: &mut DeskWorld, id: String) -> Result<(), eyre::Report> {
    let order_id = parse_id(&id)?;
    let result = run_async(world.desk.close_order(&order_id, today()));
    world.record(result);
    Ok(())
}

#[when(r#"order "{id}" is deleted"#)]
fn delete(world: &mut DeskWorld, id: String) -> Result<(), eyre::Report> {
    let order_id = parse_id(&id)?;
    let result = run_async(world.desk.delete_order(&order_id));
    world.record(result);
    Ok(())
}
