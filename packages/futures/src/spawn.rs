use {
	crate::{Error, Result, Task, error},
	futures::{future::BoxFuture, prelude::*},
	std::panic::AssertUnwindSafe,
};

/// A facility that runs units of work and forgets about them.
///
/// Implementations decide where the work runs. [`Ext`] builds tasks on top of it.
pub trait Spawn: Send + Sync {
	/// Run a future to completion.
	fn spawn(&self, future: BoxFuture<'static, ()>);

	/// Run a closure that may block.
	fn spawn_blocking(&self, f: Box<dyn FnOnce() + Send>);
}

pub trait Ext: Spawn {
	/// Run a future and return a task for its output.
	///
	/// A panic in the future fails the task. If the spawner drops the work before it completes, the task fails when it is read.
	fn spawn_task<F, T>(&self, future: F) -> Task<T>
	where
		F: Future<Output = Result<T>> + Send + 'static,
		T: Send + 'static,
	{
		let (sender, receiver) = tokio::sync::oneshot::channel();
		let future = AssertUnwindSafe(future)
			.catch_unwind()
			.map(|output| {
				let output = output.unwrap_or_else(|payload| Err(Error::from_panic(payload.as_ref())));
				if let Err(error) = &output {
					tracing::debug!(%error, "the task failed");
				}
				sender.send(output).ok();
			})
			.boxed();
		self.spawn(future);
		Task::new(receiver.map(|output| {
			output.unwrap_or_else(|_| Err(error!("the task was dropped before it completed")))
		}))
	}

	/// Run a closure that may block and return a task for its return value.
	fn launch<F, T>(&self, f: F) -> Task<T>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (sender, receiver) = tokio::sync::oneshot::channel();
		self.spawn_blocking(Box::new(move || {
			let output = std::panic::catch_unwind(AssertUnwindSafe(f))
				.map_err(|payload| Error::from_panic(payload.as_ref()));
			sender.send(output).ok();
		}));
		Task::new(receiver.map(|output| {
			output.unwrap_or_else(|_| Err(error!("the task was dropped before it completed")))
		}))
	}

	/// Turn a sequence of tasks into a task of their values, in order.
	///
	/// Each element is awaited once, so only one layer is removed: a sequence of `Task<Task<i32>>` becomes a `Task<Vec<Task<i32>>>`. The elements are awaited one after another. The first failure fails the returned task, and the elements after it are never awaited.
	fn all<I, F, T>(&self, tasks: I) -> Task<Vec<T>>
	where
		I: IntoIterator<Item = F>,
		F: Future<Output = Result<T>> + Send + 'static,
		T: Send + 'static,
	{
		let tasks = tasks.into_iter().collect::<Vec<_>>();
		self.spawn_task(async move {
			tracing::trace!(count = tasks.len(), "awaiting all tasks");
			let mut values = Vec::with_capacity(tasks.len());
			for task in tasks {
				values.push(task.await?);
			}
			Ok(values)
		})
	}
}

impl<S> Ext for S where S: Spawn + ?Sized {}
