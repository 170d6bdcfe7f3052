use crate::{Dependency, Present, Resolve, Spawn, Task, dispatch::dispatch};

/// A tuple of dependencies waiting for the callback that consumes their values.
///
/// ```rust
/// let sum = Join((a, b)).then(&executor, |a, b| a + b);
/// ```
#[derive(Debug)]
pub struct Join<D>(pub D);

macro_rules! join {
	($($T:ident),*) => {
		impl<$($T),*> Join<($($T,)*)>
		where
			$($T: Dependency,)*
		{
			/// Dispatch a task that waits for every dependency in order, then calls `callback` with their present values.
			pub fn then<S, Func, Ret>(self, spawner: &S, callback: Func) -> Task<Present<Ret>>
			where
				S: Spawn + ?Sized,
				Func: FnOnce($(Present<$T>),*) -> Ret + Send + 'static,
				Ret: Resolve,
			{
				dispatch(spawner, self.0, callback)
			}
		}
	};
}

join!();
join!(A);
join!(A, B);
join!(A, B, C);
join!(A, B, C, D);
join!(A, B, C, D, E);
join!(A, B, C, D, E, F);
join!(A, B, C, D, E, F, G);
join!(A, B, C, D, E, F, G, H);

/// Wait for any number of dependencies, then call a callback with their values.
///
/// The last argument is the callback. Every argument before it must be a [`Task`] or a [`Shared`](crate::Shared). The returned task resolves to the callback's return value with every task layer removed.
///
/// Dependency values and callback return values must implement [`Resolve`]. Declare your own types with [`present!`](crate::present) first, or `then!` fails with an unsatisfied `Resolve` bound.
///
/// ```rust
/// let sum = then!(a, b, |a, b| a + b);
/// let report = then!(in &executor; sum, |sum| format!("{sum}"));
/// let submitted = then!(|| expensive());
/// ```
#[macro_export]
macro_rules! then {
	(@split $spawner:expr; [$($dependency:expr,)*] $callback:expr $(,)?) => {
		$crate::Join(($($dependency,)*)).then($spawner, $callback)
	};
	(@split $spawner:expr; [$($dependency:expr,)*] $head:expr, $($rest:tt)+) => {
		$crate::then!(@split $spawner; [$($dependency,)* $head,] $($rest)+)
	};
	(in $spawner:expr; $($arg:tt)+) => {
		$crate::then!(@split $spawner; [] $($arg)+)
	};
	($($arg:tt)+) => {
		$crate::then!(@split &$crate::Executor::current(); [] $($arg)+)
	};
}
