use {
	crate::{Config, Result, Spawn, config, error},
	futures::future::BoxFuture,
	std::sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

/// The executors that ship with this crate.
#[derive(Clone, Debug)]
pub enum Executor {
	Tokio(Tokio),
	Thread(Thread),
}

/// Spawns onto a tokio runtime.
#[derive(Clone, Debug)]
pub struct Tokio {
	handle: tokio::runtime::Handle,
}

/// Spawns one named thread per unit of work. Futures are driven with [`futures::executor::block_on`].
#[derive(Clone, Debug)]
pub struct Thread {
	name: String,
	stack_size: Option<usize>,
	counter: Arc<AtomicU64>,
}

impl Executor {
	/// Get the executor for the current context: the current tokio runtime if there is one, otherwise a [`Thread`] executor.
	#[must_use]
	pub fn current() -> Self {
		Self::current_or(Thread::default())
	}

	pub fn from_config(config: &Config) -> Result<Self> {
		let thread = Thread::from_config(&config.thread);
		match config.executor {
			config::Kind::Auto => Ok(Self::current_or(thread)),
			config::Kind::Tokio => Tokio::try_current()
				.map(Self::Tokio)
				.ok_or_else(|| error!("expected to be called from a tokio runtime")),
			config::Kind::Thread => Ok(Self::Thread(thread)),
		}
	}

	fn current_or(thread: Thread) -> Self {
		match Tokio::try_current() {
			Some(tokio) => Self::Tokio(tokio),
			None => Self::Thread(thread),
		}
	}
}

impl Spawn for Executor {
	fn spawn(&self, future: BoxFuture<'static, ()>) {
		match self {
			Self::Tokio(tokio) => tokio.spawn(future),
			Self::Thread(thread) => thread.spawn(future),
		}
	}

	fn spawn_blocking(&self, f: Box<dyn FnOnce() + Send>) {
		match self {
			Self::Tokio(tokio) => tokio.spawn_blocking(f),
			Self::Thread(thread) => thread.spawn_blocking(f),
		}
	}
}

impl Tokio {
	#[must_use]
	pub fn new(handle: tokio::runtime::Handle) -> Self {
		Self { handle }
	}

	#[must_use]
	pub fn try_current() -> Option<Self> {
		tokio::runtime::Handle::try_current().ok().map(Self::new)
	}
}

impl Spawn for Tokio {
	fn spawn(&self, future: BoxFuture<'static, ()>) {
		self.handle.spawn(future);
	}

	fn spawn_blocking(&self, f: Box<dyn FnOnce() + Send>) {
		self.handle.spawn_blocking(f);
	}
}

impl Thread {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			stack_size: None,
			counter: Arc::new(AtomicU64::new(0)),
		}
	}

	#[must_use]
	pub fn from_config(config: &config::Thread) -> Self {
		let mut thread = Self::new(config.name.clone());
		thread.stack_size = config.stack_size;
		thread
	}

	#[must_use]
	pub fn stack_size(mut self, stack_size: usize) -> Self {
		self.stack_size = Some(stack_size);
		self
	}

	fn run(&self, f: impl FnOnce() + Send + 'static) {
		let id = self.counter.fetch_add(1, Ordering::Relaxed);
		let name = format!("{}-{id}", self.name);
		let mut builder = std::thread::Builder::new().name(name.clone());
		if let Some(stack_size) = self.stack_size {
			builder = builder.stack_size(stack_size);
		}
		if let Err(error) = builder.spawn(f) {
			tracing::error!(?error, %name, "failed to spawn the thread");
		}
	}
}

impl Default for Thread {
	fn default() -> Self {
		Self::from_config(&config::Thread::default())
	}
}

impl Spawn for Thread {
	fn spawn(&self, future: BoxFuture<'static, ()>) {
		self.run(move || futures::executor::block_on(future));
	}

	fn spawn_blocking(&self, f: Box<dyn FnOnce() + Send>) {
		self.run(f);
	}
}
