use {
	crate::{Error, Result, Shared, Task},
	futures::prelude::*,
	std::{
		collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
		path::PathBuf,
		sync::Arc,
		time::Duration,
	},
};

/// The fully unwrapped value type of `T`, with every [`Task`] and [`Shared`] layer removed.
pub type Present<T> = <T as Resolve>::Output;

/// A value that can be waited on until it reaches its present type.
///
/// Plain values resolve to themselves. [`Task`] and [`Shared`] wait for their value and resolve it again, so `Task<Task<i32>>` resolves to `i32`. A `Result` is a plain value, so a task that succeeds with an `Err` does not fail.
pub trait Resolve: Send + 'static {
	type Output: Send + 'static;

	fn resolve(self) -> impl Future<Output = Result<Self::Output>> + Send;
}

/// Declare types as plain values that resolve to themselves.
///
/// ```rust
/// struct Report;
/// strand_futures::present!(Report);
/// ```
#[macro_export]
macro_rules! present {
	($($type:ty),* $(,)?) => {
		$(
			impl $crate::Resolve for $type {
				type Output = Self;

				fn resolve(self) -> impl ::std::future::Future<Output = $crate::Result<Self>> + Send {
					::std::future::ready(Ok(self))
				}
			}
		)*
	};
}

macro_rules! generic {
	($($type:ident<$($param:ident),+>),* $(,)?) => {
		$(
			impl<$($param),+> Resolve for $type<$($param),+>
			where
				$($param: Send + 'static,)+
			{
				type Output = Self;

				fn resolve(self) -> impl Future<Output = Result<Self>> + Send {
					future::ok(self)
				}
			}
		)*
	};
}

macro_rules! tuple {
	($(($($T:ident),+)),* $(,)?) => {
		$(
			impl<$($T),+> Resolve for ($($T,)+)
			where
				$($T: Send + 'static,)+
			{
				type Output = Self;

				fn resolve(self) -> impl Future<Output = Result<Self>> + Send {
					future::ok(self)
				}
			}
		)*
	};
}

present!(
	(),
	bool,
	char,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	f32,
	f64,
	String,
	&'static str,
	PathBuf,
	Duration,
	Error,
);

generic!(
	Vec<T>,
	VecDeque<T>,
	Option<T>,
	Result<T, E>,
	Box<T>,
	BTreeSet<T>,
	HashSet<T, S>,
	BTreeMap<K, V>,
	HashMap<K, V, S>,
);

tuple!(
	(A),
	(A, B),
	(A, B, C),
	(A, B, C, D),
	(A, B, C, D, E),
	(A, B, C, D, E, F),
	(A, B, C, D, E, F, G),
	(A, B, C, D, E, F, G, H),
);

impl<T> Resolve for Arc<T>
where
	T: Send + Sync + 'static,
{
	type Output = Self;

	fn resolve(self) -> impl Future<Output = Result<Self>> + Send {
		future::ok(self)
	}
}

impl<T> Resolve for Task<T>
where
	T: Resolve,
{
	type Output = Present<T>;

	fn resolve(self) -> impl Future<Output = Result<Self::Output>> + Send {
		async move { self.await?.resolve().await }
	}
}

impl<T> Resolve for Shared<T>
where
	T: Resolve + Clone + Sync,
{
	type Output = Present<T>;

	fn resolve(self) -> impl Future<Output = Result<Self::Output>> + Send {
		async move { self.await?.resolve().await }
	}
}

/// Wait for a value to reach its present type.
pub async fn resolve<T>(value: T) -> Result<Present<T>>
where
	T: Resolve,
{
	value.resolve().await
}
