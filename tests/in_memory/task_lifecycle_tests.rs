//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TestStore, create_task, ensure_disjoint, store};
use rstest::rstest;
use servicetask::task::{
    domain::{Collection, Price},
    services::{TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
fn oil_change_shows_as_pending(mut store: TestStore) -> Result<(), eyre::Report> {
    create_task(&mut store, "Oil change", "45.50", false)?;

    let task = store
        .active()
        .first()
        .ok_or_else(|| eyre::eyre!("expected an active task"))?;
    eyre::ensure!(task.name().as_str() == "Oil change");
    eyre::ensure!(task.price().to_string() == "45.50");
    eyre::ensure!(!task.is_paid());

    let totals = store.totals();
    eyre::ensure!(totals.pending == Price::from_cents(4550));
    eyre::ensure!(totals.paid == Price::ZERO);
    eyre::ensure!(totals.pending_count == 1 && totals.paid_count == 0);
    Ok(())
}

#[rstest]
fn archive_round_trip_keeps_identity(mut store: TestStore) -> Result<(), eyre::Report> {
    let id = create_task(&mut store, "Timing belt", "380", true)?;
    let original = store
        .find(id)
        .map(|(_, task)| task.clone())
        .ok_or_else(|| eyre::eyre!("created task missing"))?;

    store.archive(id)?;
    eyre::ensure!(store.active().is_empty());
    let archived_at = store
        .find(id)
        .and_then(|(_, task)| task.archived_at())
        .ok_or_else(|| eyre::eyre!("archived task has no archived_at"))?;
    eyre::ensure!(archived_at >= original.created_at());

    let restored = store.restore_from_archive(id)?;
    eyre::ensure!(restored.id() == original.id());
    eyre::ensure!(restored.created_at() == original.created_at());
    eyre::ensure!(restored.name() == original.name());
    eyre::ensure!(restored.price() == original.price());
    eyre::ensure!(restored.is_paid() == original.is_paid());
    eyre::ensure!(restored.archived_at().is_none());
    ensure_disjoint(&store)
}

#[rstest]
fn trash_round_trip_marks_restoration(mut store: TestStore) -> Result<(), eyre::Report> {
    let id = create_task(&mut store, "Battery swap", "150", false)?;

    let trashed = store.trash(id)?;
    eyre::ensure!(trashed.deleted_at().is_some());

    let restored = store.restore_from_trash(id)?;
    eyre::ensure!(restored.restored_at().is_some());
    eyre::ensure!(restored.deleted_at().is_none());
    eyre::ensure!(store.find(id).map(|(collection, _)| collection) == Some(Collection::Active));
    ensure_disjoint(&store)
}

#[rstest]
fn purged_task_cannot_be_restored(mut store: TestStore) -> Result<(), eyre::Report> {
    let id = create_task(&mut store, "Spark plugs", "60", false)?;
    store.trash(id)?;

    store.permanently_delete(id)?;

    eyre::ensure!(store.find(id).is_none());
    let result = store.restore_from_trash(id);
    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::NotFound { .. })),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn emptying_trash_spares_active_and_archive(mut store: TestStore) -> Result<(), eyre::Report> {
    create_task(&mut store, "Keep me", "10", false)?;
    let archived = create_task(&mut store, "Archive me", "20", true)?;
    store.archive(archived)?;
    for name in ["Filter", "Hose", "Clamp"] {
        let id = create_task(&mut store, name, "5", false)?;
        store.trash(id)?;
    }

    eyre::ensure!(store.empty_trash() == 3);
    eyre::ensure!(store.empty_trash() == 0);

    let counts = store.counts();
    eyre::ensure!(counts.trash == 0);
    eyre::ensure!(counts.active == 1);
    eyre::ensure!(counts.archive == 1);
    Ok(())
}

#[rstest]
fn editing_an_archived_task_is_refused(mut store: TestStore) -> Result<(), eyre::Report> {
    let id = create_task(&mut store, "Alignment", "90", false)?;
    store.archive(id)?;

    let result = store.update(&UpdateTaskRequest::new(id, "Alignment", "95", true));

    eyre::ensure!(matches!(result, Err(TaskLifecycleError::NotFound { .. })));
    eyre::ensure!(store.archived().len() == 1);
    Ok(())
}

#[rstest]
fn not_found_errors_name_the_searched_collections(
    mut store: TestStore,
) -> Result<(), eyre::Report> {
    let id = create_task(&mut store, "Alignment", "90", false)?;
    store.trash(id)?;

    let Err(archive_err) = store.archive(id) else {
        return Err(eyre::eyre!("archiving a trashed task should fail"));
    };
    eyre::ensure!(archive_err.to_string() == format!("task {id} not found in active"));

    let Err(trash_err) = store.trash(id) else {
        return Err(eyre::eyre!("trashing a trashed task should fail"));
    };
    eyre::ensure!(trash_err.to_string() == format!("task {id} not found in active or archive"));
    Ok(())
}
