//! When steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use servicetask::task::services::CreateTaskRequest;

#[when(r#"a task "{name}" priced "{price}" is created unpaid"#)]
fn create_unpaid_task(
    world: &mut TaskLifecycleWorld,
    name: String,
    price: String,
) -> Result<(), eyre::Report> {
    let created = world
        .store
        .create(&CreateTaskRequest::new(name, price, false))
        .wrap_err("create task")?;
    world.original = Some(created);
    Ok(())
}

#[when("the task is archived")]
fn archive_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_id()?;
    let result = world.store.archive(task_id);
    world.record(result);
    Ok(())
}

#[when("the task is restored from the archive")]
fn restore_from_archive(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_id()?;
    let result = world.store.restore_from_archive(task_id);
    world.record(result);
    Ok(())
}

#[when("the task is moved to the trash")]
fn trash_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_id()?;
    let result = world.store.trash(task_id);
    world.record(result);
    Ok(())
}

#[when("the task is restored from the trash")]
fn restore_from_trash(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_id()?;
    let result = world.store.restore_from_trash(task_id);
    world.record(result);
    Ok(())
}

#[when("the task is permanently deleted")]
fn permanently_delete(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.current_id()?;
    let result = world.store.permanently_delete(task_id);
    world.record(result);
    Ok(())
}

#[when("the trash is emptied")]
fn empty_trash(world: &mut TaskLifecycleWorld) {
    world.store.empty_trash();
}
