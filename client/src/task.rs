// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use gloo_timers::callback::Timeout;
use std::time::Duration;

/// A task waiting on a timer. Cancelling it guarantees the task won't run if it hasn't already.
pub trait PendingTimer {
	fn cancel(self: Box<Self>);
}

/// Runs tasks after a delay
pub trait Scheduler {
	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn PendingTimer>;
}

/// Schedules tasks on the browser's `setTimeout`
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn PendingTimer> {
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		Box::new(Timeout::new(millis, task))
	}
}

impl PendingTimer for Timeout {
	fn cancel(self: Box<Self>) {
		drop((*self).cancel());
	}
}

/// Spawns futures onto the browser's microtask queue
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
	fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
		wasm_bindgen_futures::spawn_local(future);
		Ok(())
	}
}
