//! Compile-time arity and positional access for heterogeneous tuples.

use std::ops::Range;

/// A fixed-length, heterogeneously typed list of values.
pub trait Pack {
	const LEN: usize;

	/// The positions of the pack's elements, in order.
	#[must_use]
	fn indices() -> Range<usize> {
		0..Self::LEN
	}
}

/// Access to the element at position `I`.
///
/// There is no impl for a position past the end of the pack, so an out of range access does not compile.
pub trait Get<const I: usize> {
	type Output;

	fn get(&self) -> &Self::Output;
}

/// Get a reference to the element at position `I` of a pack.
pub fn get<const I: usize, P>(pack: &P) -> &P::Output
where
	P: Get<I>,
{
	pack.get()
}

macro_rules! pack {
	(@get $types:tt $(($index:tt $T:ident))*) => {
		$(pack!(@item $types $index $T);)*
	};
	(@item [$($U:ident),*] $index:tt $T:ident) => {
		impl<$($U),*> Get<$index> for ($($U,)*) {
			type Output = $T;

			fn get(&self) -> &Self::Output {
				&self.$index
			}
		}
	};
	($len:literal; $(($index:tt $T:ident)),*) => {
		impl<$($T),*> Pack for ($($T,)*) {
			const LEN: usize = $len;
		}

		pack!(@get [$($T),*] $(($index $T))*);
	};
}

pack!(0;);
pack!(1; (0 A));
pack!(2; (0 A), (1 B));
pack!(3; (0 A), (1 B), (2 C));
pack!(4; (0 A), (1 B), (2 C), (3 D));
pack!(5; (0 A), (1 B), (2 C), (3 D), (4 E));
pack!(6; (0 A), (1 B), (2 C), (3 D), (4 E), (5 F));
pack!(7; (0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G));
pack!(8; (0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H));

#[cfg(test)]
mod tests {
	use {
		super::{Get, Pack, get},
		pretty_assertions::assert_eq,
	};

	#[test]
	fn indices() {
		assert_eq!(<()>::indices().collect::<Vec<_>>(), Vec::<usize>::new());
		assert_eq!(<(u8, String, bool)>::LEN, 3);
		assert_eq!(<(u8, String, bool)>::indices().collect::<Vec<_>>(), [0, 1, 2]);
		assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8)>::indices().len(), 8);
	}

	#[test]
	fn positional_access() {
		let pack = (1u8, String::from("two"), 3u64);
		assert_eq!(*get::<0, _>(&pack), 1);
		assert_eq!(get::<1, _>(&pack), "two");
		assert_eq!(*Get::<2>::get(&pack), 3);
	}

	#[test]
	fn access_is_by_reference() {
		let pack = (vec![1, 2, 3], 4);
		let first: &Vec<i32> = get::<0, _>(&pack);
		assert!(std::ptr::eq(first, &pack.0));
	}
}
