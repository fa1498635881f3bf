//! Chore and task screens.

use super::ScreenRepository;
use super::write::submit_delete;
use crate::core::{Dispatcher, join_into};
use crate::entities::{
    Chore, ChoreEntry, ChoreEntryModel, ChoreModel, Task, TaskCategory, TaskCategoryModel,
    TaskModel, User, UserModel,
};
use crate::errors::{Error, Result};
use crate::store::Store;
use std::future::Future;

bundle! {
    /// Chore overview: definitions, schedule state and assignees.
    ChoresBundle {
        chores: ChoreModel,
        chore_entries: ChoreEntryModel,
        users: UserModel,
    }
}

/// Loads [`ChoresBundle`].
#[derive(Clone, Debug)]
pub struct ChoresRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl ChoresRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }
}

impl ScreenRepository for ChoresRepository {
    type Bundle = ChoresBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<ChoresBundle>> + Send + 'static {
        join_into((
            self.store.all::<Chore>(),
            self.store.all::<ChoreEntry>(),
            self.store.all::<User>(),
        ))
    }
}

bundle! {
    /// Task list.
    TasksBundle {
        tasks: TaskModel,
        task_categories: TaskCategoryModel,
        users: UserModel,
    }
}

/// Loads [`TasksBundle`] and removes tasks.
#[derive(Clone, Debug)]
pub struct TasksRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl TasksRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Deletes a task by id.
    pub fn delete_task<S, E>(&self, id: i64, on_success: S, on_error: E)
    where
        S: FnOnce(()) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_delete(&self.dispatcher, self.store.table::<Task>(), id, on_success, on_error);
    }
}

impl ScreenRepository for TasksRepository {
    type Bundle = TasksBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<TasksBundle>> + Send + 'static {
        join_into((
            self.store.all::<Task>(),
            self.store.all::<TaskCategory>(),
            self.store.all::<User>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::test_utils::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_chores_bundle() -> Result<()> {
        let (store, dispatcher, _queue) = setup_test_app().await?;
        seed_household(&store).await?;

        let bundle = ChoresRepository::new(store, dispatcher).load().await?;
        assert_eq!(bundle.chores().len(), 1);
        assert_eq!(bundle.chore_entries()[0].chore_id, bundle.chores()[0].id);
        assert_eq!(
            bundle.chore_entries()[0].next_execution_assigned_to_user_id,
            Some(2)
        );
        assert_eq!(bundle.users().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_tasks_bundle_and_delete() -> Result<()> {
        let (store, dispatcher, mut queue) = setup_test_app().await?;
        seed_household(&store).await?;
        let repository = TasksRepository::new(store, dispatcher);

        let bundle = repository.load().await?;
        assert_eq!(bundle.tasks().len(), 2);
        assert_eq!(bundle.task_categories().len(), 1);

        let done = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&done);
        repository.delete_task(
            bundle.tasks()[0].id,
            move |()| *flag.lock().unwrap() = true,
            |err| panic!("delete failed: {err}"),
        );
        assert!(queue.deliver_next().await);
        assert!(*done.lock().unwrap());

        let after = repository.load().await?;
        assert_eq!(after.tasks().len(), 1);
        assert_ne!(after.tasks()[0].id, bundle.tasks()[0].id);
        Ok(())
    }
}
