// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Traps and policies for errors raised while logging.

use std::fmt;
use std::io;
use std::io::Write;

use crate::Error;

/// A trap for handling errors relayed by a logger.
///
/// Closures are not traps by themselves: wrap one in [`FnTrap`], or register it with
/// [`Config::trap_fn`](crate::Config::trap_fn).
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle an error.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A default trap that sends errors to standard error if possible.
///
/// If standard error is not available, it does nothing.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DefaultTrap {}

impl Trap for DefaultTrap {
    fn trap(&self, err: &Error) {
        let _ = writeln!(io::stderr(), "{err}");
    }
}

/// A trap wrapping a closure.
///
/// # Examples
///
/// ```
/// use logtrail::trap::FnTrap;
///
/// let trap = FnTrap::new(|err| eprintln!("logger failed: {err}"));
/// ```
pub struct FnTrap<F>(F);

impl<F> FnTrap<F>
where
    F: Fn(&Error) + Send + Sync + 'static,
{
    /// Create a trap from the given closure.
    pub fn new(f: F) -> Self {
        FnTrap(f)
    }
}

impl<F> fmt::Debug for FnTrap<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTrap").finish_non_exhaustive()
    }
}

impl<F> Trap for FnTrap<F>
where
    F: Fn(&Error) + Send + Sync + 'static,
{
    fn trap(&self, err: &Error) {
        (self.0)(err)
    }
}

/// How a logger surfaces failed operations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Hand errors to the registered [`Trap`] and report success to the caller.
    ///
    /// Errors are dropped if no trap is registered.
    #[default]
    Relay,
    /// Return errors to the caller.
    Throw,
}

/// The single choke point every logger error goes through.
#[derive(Debug, Default)]
pub(crate) struct Dispatcher {
    policy: ErrorPolicy,
    trap: Option<Box<dyn Trap>>,
}

impl Dispatcher {
    pub(crate) fn new(policy: ErrorPolicy, trap: Option<Box<dyn Trap>>) -> Self {
        Self { policy, trap }
    }

    pub(crate) fn dispatch(&self, err: Error) -> Result<(), Error> {
        match self.policy {
            ErrorPolicy::Throw => Err(err),
            ErrorPolicy::Relay => {
                self.relay(&err);
                Ok(())
            }
        }
    }

    /// Hand an error to the trap whatever the policy.
    pub(crate) fn relay(&self, err: &Error) {
        if let Some(trap) = &self.trap {
            trap.trap(err);
        }
    }
}
