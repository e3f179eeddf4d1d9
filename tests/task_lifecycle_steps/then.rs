//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use rstest_bdd_macros::then;
use servicetask::task::{
    domain::{Collection, Task},
    services::TaskLifecycleError,
};

#[then("the {collection} collection holds {count:usize} task")]
fn collection_holds_one(
    world: &TaskLifecycleWorld,
    collection: String,
    count: usize,
) -> Result<(), eyre::Report> {
    collection_holds(world, &collection, count)
}

#[then("the {collection} collection holds {count:usize} tasks")]
fn collection_holds_many(
    world: &TaskLifecycleWorld,
    collection: String,
    count: usize,
) -> Result<(), eyre::Report> {
    collection_holds(world, &collection, count)
}

#[then(r#"the pending total is "{amount}""#)]
fn pending_total_is(world: &TaskLifecycleWorld, amount: String) -> Result<(), eyre::Report> {
    let pending = world.store.totals().pending.to_string();
    eyre::ensure!(pending == amount, "expected pending {amount}, found {pending}");
    Ok(())
}

#[then(r#"the paid total is "{amount}""#)]
fn paid_total_is(world: &TaskLifecycleWorld, amount: String) -> Result<(), eyre::Report> {
    let paid = world.store.totals().paid.to_string();
    eyre::ensure!(paid == amount, "expected paid {amount}, found {paid}");
    Ok(())
}

#[then(r#"the task is in the "{collection}" collection"#)]
fn task_is_in(world: &TaskLifecycleWorld, collection: String) -> Result<(), eyre::Report> {
    let expected = Collection::try_from(collection.as_str())
        .map_err(|err| eyre::eyre!("invalid collection in scenario: {err}"))?;
    let located = world.store.ledger().locate(world.current_id()?);
    eyre::ensure!(
        located == Some(expected),
        "expected task in {expected}, found {located:?}"
    );
    Ok(())
}

#[then("the task is in no collection")]
fn task_is_nowhere(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let located = world.store.ledger().locate(world.current_id()?);
    eyre::ensure!(located.is_none(), "expected no task, found it in {located:?}");
    Ok(())
}

#[then("the task matches its original fields")]
fn task_matches_original(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let original = world
        .original
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;
    let (_, current) = world
        .store
        .find(original.id())
        .ok_or_else(|| eyre::eyre!("task {} vanished", original.id()))?;
    eyre::ensure!(
        current == original,
        "expected {original:?}, found {current:?}"
    );
    Ok(())
}

#[then("the task has no archive stamp")]
fn no_archive_stamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    eyre::ensure!(task.archived_at().is_none(), "archive stamp still present");
    Ok(())
}

#[then("the task has a restore stamp")]
fn has_restore_stamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    eyre::ensure!(task.restored_at().is_some(), "restore stamp missing");
    Ok(())
}

#[then("the task has no delete stamp")]
fn no_delete_stamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    eyre::ensure!(task.deleted_at().is_none(), "delete stamp still present");
    Ok(())
}

#[then("the last operation failed with a not found error")]
fn last_operation_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if !matches!(result, Err(TaskLifecycleError::NotFound { .. })) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}

fn collection_holds(
    world: &TaskLifecycleWorld,
    name: &str,
    count: usize,
) -> Result<(), eyre::Report> {
    let collection = Collection::try_from(name)
        .map_err(|err| eyre::eyre!("invalid collection in scenario: {err}"))?;
    let held = world.store.tasks_in(collection).len();
    eyre::ensure!(
        held == count,
        "expected {count} tasks in {collection}, found {held}"
    );
    Ok(())
}

fn last_task(world: &TaskLifecycleWorld) -> Result<&Task, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("last operation failed: {err}"))
}
