pub use {
	self::{
		config::Config,
		dispatch::{Callback, Dependencies, Dependency, dispatch},
		executor::{Executor, Thread, Tokio},
		pack::{Get, Pack},
		resolve::{Present, Resolve, resolve},
		spawn::{Ext, Spawn},
		task::{Shared, Task},
		then::Join,
	},
	strand_error::{Error, Result, error},
};

use futures::Future;

pub mod config;
pub mod dispatch;
pub mod executor;
pub mod pack;
pub mod resolve;
pub mod spawn;
pub mod task;
pub mod then;


/// Turn a sequence of tasks into a task of their values, in order, on the current executor. See [`Ext::all`].
pub fn all<I, F, T>(tasks: I) -> Task<Vec<T>>
where
	I: IntoIterator<Item = F>,
	F: Future<Output = Result<T>> + Send + 'static,
	T: Send + 'static,
{
	Executor::current().all(tasks)
}

/// Run a closure that may block on the current executor. See [`Ext::launch`].
pub fn launch<F, T>(f: F) -> Task<T>
where
	F: FnOnce() -> T + Send + 'static,
	T: Send + 'static,
{
	Executor::current().launch(f)
}

/// Run a future on the current executor. See [`Ext::spawn_task`].
pub fn spawn<F, T>(future: F) -> Task<T>
where
	F: Future<Output = Result<T>> + Send + 'static,
	T: Send + 'static,
{
	Executor::current().spawn_task(future)
}
