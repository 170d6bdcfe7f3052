use {
	crate::{Result, Task},
	futures::{future::BoxFuture, prelude::*},
	std::{
		pin::Pin,
		task::{Context, Poll},
	},
};

/// A cloneable handle to the eventual value of a [`Task`].
///
/// Every clone observes the same value or the same failure. The value is dropped when the last clone is dropped.
#[derive(Clone)]
pub struct Shared<T> {
	future: future::Shared<BoxFuture<'static, Result<T>>>,
}

impl<T> Shared<T>
where
	T: Clone + Send + Sync + 'static,
{
	pub fn new(task: Task<T>) -> Self {
		let future = task.future.shared();
		Self { future }
	}

	/// Create a shared handle that has already completed with a value.
	pub fn ready(value: T) -> Self {
		Self::new(Task::ready(value))
	}

	pub async fn wait(&self) -> Result<T> {
		self.future.clone().await
	}

	/// Block the current thread until the value is available.
	pub fn get(&self) -> Result<T> {
		futures::executor::block_on(self.future.clone())
	}

	/// Get the output if some clone has already driven the task to completion.
	#[must_use]
	pub fn peek(&self) -> Option<&Result<T>> {
		self.future.peek()
	}
}

impl<T> From<Task<T>> for Shared<T>
where
	T: Clone + Send + Sync + 'static,
{
	fn from(value: Task<T>) -> Self {
		Self::new(value)
	}
}

impl<T> Future for Shared<T>
where
	T: Clone,
{
	type Output = Result<T>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		self.get_mut().future.poll_unpin(cx)
	}
}

impl<T> std::fmt::Debug for Shared<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Shared").finish_non_exhaustive()
	}
}
