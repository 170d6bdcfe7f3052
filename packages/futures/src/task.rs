use {
	crate::{Error, Result},
	futures::{future::BoxFuture, prelude::*},
	std::{
		pin::Pin,
		task::{Context, Poll},
	},
};

pub use self::shared::Shared;

pub mod shared;

/// A one-shot handle to a value that becomes available asynchronously.
///
/// A task is read exactly once, by awaiting it, by calling [`Task::get`], or by moving it into a combinator. Use [`Task::share`] to read the same value from several places.
#[must_use = "dropping a task discards its value"]
pub struct Task<T> {
	future: BoxFuture<'static, Result<T>>,
}

impl<T> Task<T>
where
	T: Send + 'static,
{
	/// Wrap a future. The future is polled only when the task is read.
	pub fn new<F>(future: F) -> Self
	where
		F: Future<Output = Result<T>> + Send + 'static,
	{
		let future = future.boxed();
		Self { future }
	}

	/// Create a task that has already completed with a value.
	pub fn ready(value: T) -> Self {
		Self::new(future::ok(value))
	}

	/// Create a task that has already failed.
	pub fn error(error: Error) -> Self {
		Self::new(future::err(error))
	}

	/// Block the current thread until the value is available.
	///
	/// This must not be called from a thread that drives the work this task waits on, such as the only worker of a current thread tokio runtime.
	pub fn get(self) -> Result<T> {
		futures::executor::block_on(self)
	}

	/// Convert this task into a handle that can be cloned and read any number of times.
	pub fn share(self) -> Shared<T>
	where
		T: Clone + Sync,
	{
		Shared::new(self)
	}
}

impl<T> From<Result<T>> for Task<T>
where
	T: Send + 'static,
{
	fn from(value: Result<T>) -> Self {
		Self::new(future::ready(value))
	}
}

impl<T> Future for Task<T> {
	type Output = Result<T>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		self.get_mut().future.poll_unpin(cx)
	}
}

impl<T> std::fmt::Debug for Task<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Task").finish_non_exhaustive()
	}
}
