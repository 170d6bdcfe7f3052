use {
	crate::{
		Ext as _, Present, Resolve, Result, Shared, Spawn, Task,
		pack::{Get, Pack},
	},
	futures::prelude::*,
};

/// A handle that `then` accepts as a dependency: a [`Task`], which is moved into the dispatched work, or a [`Shared`], whose clone is.
pub trait Dependency: Resolve + private::Sealed {
	/// Whether this handle can be read more than once.
	fn is_shared(&self) -> bool;
}

/// A tuple of dependencies, resolved in order.
pub trait Dependencies: Pack + Send + 'static {
	type Values: Send + 'static;

	/// The number of shared handles in the tuple.
	fn shared(&self) -> usize;

	/// Resolve each dependency in turn, starting to wait on one only after the previous one completed. The first failure is returned and the rest are not resolved.
	fn resolve(self) -> impl Future<Output = Result<Self::Values>> + Send;
}

/// A callback that accepts the values of a tuple of dependencies as positional arguments.
pub trait Callback<Args>: Send + 'static {
	type Output;

	fn call(self, args: Args) -> Self::Output;
}

mod private {
	pub trait Sealed {}
}

impl<T> private::Sealed for Task<T> {}

impl<T> private::Sealed for Shared<T> {}

impl<T> Dependency for Task<T>
where
	T: Resolve,
{
	fn is_shared(&self) -> bool {
		false
	}
}

impl<T> Dependency for Shared<T>
where
	T: Resolve + Clone + Sync,
{
	fn is_shared(&self) -> bool {
		true
	}
}

macro_rules! dependencies {
	($(($index:tt $T:ident)),*) => {
		impl<$($T),*> Dependencies for ($($T,)*)
		where
			$($T: Dependency,)*
		{
			type Values = ($(Present<$T>,)*);

			fn shared(&self) -> usize {
				0 $(+ usize::from(Get::<$index>::get(self).is_shared()))*
			}

			#[allow(non_snake_case)]
			fn resolve(self) -> impl Future<Output = Result<Self::Values>> + Send {
				let ($($T,)*) = self;
				async move {
					$(let $T = Resolve::resolve($T).await?;)*
					Ok(($($T,)*))
				}
			}
		}

		impl<Func, Ret, $($T),*> Callback<($($T,)*)> for Func
		where
			Func: FnOnce($($T),*) -> Ret + Send + 'static,
		{
			type Output = Ret;

			#[allow(non_snake_case)]
			fn call(self, args: ($($T,)*)) -> Ret {
				let ($($T,)*) = args;
				self($($T),*)
			}
		}
	};
}

dependencies!();
dependencies!((0 A));
dependencies!((0 A), (1 B));
dependencies!((0 A), (1 B), (2 C));
dependencies!((0 A), (1 B), (2 C), (3 D));
dependencies!((0 A), (1 B), (2 C), (3 D), (4 E));
dependencies!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F));
dependencies!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G));
dependencies!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H));

/// Spawn one task that resolves the dependencies, calls the callback with their values, and resolves the callback's return value.
pub fn dispatch<S, D, F>(spawner: &S, dependencies: D, callback: F) -> Task<Present<F::Output>>
where
	S: Spawn + ?Sized,
	D: Dependencies,
	F: Callback<D::Values>,
	F::Output: Resolve,
{
	let count = D::LEN;
	let shared = dependencies.shared();
	spawner.spawn_task(async move {
		tracing::trace!(dependencies = count, shared, "resolving the dependencies");
		let values = Dependencies::resolve(dependencies).await?;
		callback.call(values).resolve().await
	})
}
