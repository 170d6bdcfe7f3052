use std::{any::Any, collections::BTreeMap, sync::Arc};
use thiserror::Error;

/// A result alias that defaults to `Error` as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failure stored in a task's completion slot.
///
/// Errors are cheap to clone, since a shared task hands the same failure to every reader.
#[derive(Clone, Debug, Error, serde::Deserialize, serde::Serialize)]
#[error("{message}")]
pub struct Error {
	/// The error's message.
	pub message: String,

	/// The optional location of where the error occurred.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<Location>,

	/// An optional error that this error wraps.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source: Option<Arc<Error>>,

	/// A map of key/value pairs of context associated with the error.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub values: BTreeMap<String, String>,
}

/// An error location.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Location {
	pub source: String,
	pub line: u32,
	pub column: u32,
}

pub struct Trace<'a>(&'a Error);

impl Error {
	/// Construct a [Trace] from an error, which can be used to display a helpful error trace.
	#[must_use]
	pub fn trace(&self) -> Trace<'_> {
		Trace(self)
	}

	/// Create an error from the payload of a caught panic.
	#[must_use]
	pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
		let message = payload
			.downcast_ref::<&str>()
			.copied()
			.or(payload.downcast_ref::<String>().map(String::as_str));
		let mut error = crate::error!("the task panicked");
		if let Some(message) = message {
			error.values.insert("panic".to_owned(), message.to_owned());
			error.message = format!("the task panicked: {message}");
		}
		error
	}

	/// Iterate over this error and the errors it wraps, outermost first.
	pub fn chain(&self) -> impl Iterator<Item = &Error> {
		std::iter::successors(Some(self), |error| error.source.as_deref())
	}
}

impl<'a> From<&'a std::panic::Location<'a>> for Location {
	fn from(location: &'a std::panic::Location<'a>) -> Self {
		Self {
			source: location.file().to_owned(),
			line: location.line() - 1,
			column: location.column() - 1,
		}
	}
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for Error {
	fn from(value: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
		match value.downcast::<Error>() {
			Ok(error) => *error,
			Err(error) => Self {
				message: error.to_string(),
				location: None,
				source: error.source().map(Into::into).map(Arc::new),
				values: BTreeMap::new(),
			},
		}
	}
}

impl From<&(dyn std::error::Error + 'static)> for Error {
	fn from(value: &(dyn std::error::Error + 'static)) -> Self {
		Self {
			message: value.to_string(),
			location: None,
			source: value.source().map(Into::into).map(Arc::new),
			values: BTreeMap::new(),
		}
	}
}

impl std::fmt::Display for Trace<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Error:")?;
		let mut first = true;
		for error in self.0.chain() {
			if !first {
				writeln!(f)?;
			}
			first = false;
			let Error {
				message,
				location,
				values,
				..
			} = error;
			write!(f, "-> {message}")?;
			if let Some(location) = &location {
				write!(f, " {location}")?;
			}
			for (name, value) in values {
				writeln!(f)?;
				write!(f, "   {name} = {value}")?;
			}
		}
		Ok(())
	}
}

impl std::fmt::Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}:{}", self.source, self.line + 1, self.column + 1)
	}
}

/// Generate an [Error].
///
/// Usage:
/// ```rust
/// error!("Error message.");
/// error!("Error message with interpolation. {}", 42);
///
/// let name = "value";
/// error!(%name, "Error message with an associated value (pretty printed).");
/// error!(?name, "Error message with an associated value (debug printed).");
///
/// let error = std::io::Error::last_os_error();
/// error!(source = error, "An error that wraps an existing error.");
/// ```
#[macro_export]
macro_rules! error {
	({ $error:ident }, %$name:ident, $($arg:tt)*) => {
		$error.values.insert(stringify!($name).to_owned(), $name.to_string());
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, ?$name:ident, $($arg:tt)*) => {
		$error.values.insert(stringify!($name).to_owned(), format!("{:?}", $name));
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, source = $source:expr, $($arg:tt)*) => {
		$error.source.replace(std::sync::Arc::new({
			let source: Box<dyn std::error::Error + Send + Sync + 'static> = Box::new($source);
			source.into()
		}));
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, $($arg:tt)*) => {
		$error.message = format!($($arg)*);
	};
	($($arg:tt)*) => {{
		let mut __error = $crate::Error {
			message: String::new(),
			location: Some($crate::Location {
				source: file!().to_owned(),
				line: line!() - 1,
				column: column!() - 1,
			}),
			source: None,
			values: std::collections::BTreeMap::new(),
		};
		$crate::error!({ __error }, $($arg)*);
		__error
	}};
}

#[cfg(test)]
mod tests {
	use {crate::Error, pretty_assertions::assert_eq};

	#[test]
	fn error_macro() {
		let foo = "foo";
		let bar = "bar";
		let error = crate::error!(?foo, %bar, "{} bar", foo);
		assert_eq!(error.message, "foo bar");
		assert_eq!(error.values["foo"], "\"foo\"");
		assert_eq!(error.values["bar"], "bar");
		let location = error.location.as_ref().unwrap();
		assert_eq!(location.source, "packages/error/src/lib.rs");

		let source = std::io::Error::other("Unexpected error.");
		let error = crate::error!(source = source, "An error occurred.");
		let messages = error
			.chain()
			.map(|error| error.message.as_str())
			.collect::<Vec<_>>();
		assert_eq!(messages, ["An error occurred.", "Unexpected error."]);
	}

	#[test]
	fn trace() {
		let inner = std::io::Error::other("boom");
		let error = crate::error!(source = inner, "failed to resolve the dependency");
		let trace = error.trace().to_string();
		let lines = trace.lines().collect::<Vec<_>>();
		assert_eq!(lines[0], "Error:");
		assert!(lines[1].starts_with("-> failed to resolve the dependency packages/error/src/lib.rs:"));
		assert_eq!(lines[2], "-> boom");
	}

	fn payload(f: impl FnOnce() + std::panic::UnwindSafe) -> Box<dyn std::any::Any + Send> {
		std::panic::catch_unwind(f).unwrap_err()
	}

	#[test]
	fn from_panic() {
		let error = Error::from_panic(payload(|| panic!("boom")).as_ref());
		assert_eq!(error.message, "the task panicked: boom");
		assert_eq!(error.values["panic"], "boom");

		let error = Error::from_panic(payload(|| std::panic::panic_any(7)).as_ref());
		assert_eq!(error.message, "the task panicked");
	}

	#[test]
	fn clone_shares_source() {
		let error = crate::error!(source = std::io::Error::other("inner"), "outer");
		let clone = error.clone();
		assert!(std::sync::Arc::ptr_eq(
			error.source.as_ref().unwrap(),
			clone.source.as_ref().unwrap()
		));
	}
}
