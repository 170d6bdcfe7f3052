#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub executor: Kind,

	#[serde(default)]
	pub thread: Thread,
}

/// Where combinators dispatch their work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
	/// Use the current tokio runtime if there is one, otherwise spawn threads.
	#[default]
	Auto,

	/// Use the current tokio runtime.
	Tokio,

	/// Spawn one thread per unit of work.
	Thread,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Thread {
	/// The prefix of spawned threads' names.
	#[serde(default = "default_thread_name")]
	pub name: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stack_size: Option<usize>,
}

impl Default for Thread {
	fn default() -> Self {
		Self {
			name: default_thread_name(),
			stack_size: None,
		}
	}
}

fn default_thread_name() -> String {
	"strand".to_owned()
}
