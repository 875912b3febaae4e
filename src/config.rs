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

use std::path::PathBuf;

use crate::clock::Clock;
use crate::Error;
use crate::console::Console;
use crate::console::Stdout;
use crate::trap::ErrorPolicy;
use crate::trap::FnTrap;
use crate::trap::Trap;

/// The directory used when none is configured, relative to the working directory.
pub const DEFAULT_DIRECTORY: &str = "Logs";

/// When queued lines are mirrored to the console.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueueMirror {
    /// Mirror as soon as a line is queued, ahead of the file write.
    OnAdd,
    /// Mirror after the queue has been appended to the log file.
    #[default]
    OnExecute,
}

/// Configuration of a logger session.
///
/// # Examples
///
/// ```
/// use logtrail::Config;
/// use logtrail::trap::DefaultTrap;
///
/// let config = Config::new("my_logs")
///     .mirror_console(true)
///     .timestamps(true)
///     .trap(DefaultTrap::default());
/// ```
#[derive(Debug)]
pub struct Config {
    pub(crate) directory: PathBuf,
    pub(crate) mirror_console: bool,
    pub(crate) timestamps: bool,
    pub(crate) queue_mirror: QueueMirror,
    pub(crate) error_policy: ErrorPolicy,
    pub(crate) trap: Option<Box<dyn Trap>>,
    pub(crate) console: Box<dyn Console>,
    pub(crate) clock: Clock,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_DIRECTORY)
    }
}

impl Config {
    /// Create a configuration logging into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            mirror_console: false,
            timestamps: false,
            queue_mirror: QueueMirror::default(),
            error_policy: ErrorPolicy::default(),
            trap: None,
            console: Box::new(Stdout::default()),
            clock: Clock::default(),
        }
    }

    /// Set the log directory.
    ///
    /// Default to `./Logs`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Mirror every logged line to the console sink.
    ///
    /// Default to `false`.
    pub fn mirror_console(mut self, enabled: bool) -> Self {
        self.mirror_console = enabled;
        self
    }

    /// Prefix every message line with a `[HH:MM:SS] ` UTC timestamp.
    ///
    /// Default to `false`.
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Set when queued lines are mirrored.
    ///
    /// Default to [`QueueMirror::OnExecute`].
    pub fn queue_mirror(mut self, queue_mirror: QueueMirror) -> Self {
        self.queue_mirror = queue_mirror;
        self
    }

    /// Set how failed operations are surfaced.
    ///
    /// Default to [`ErrorPolicy::Relay`].
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the trap receiving relayed errors.
    ///
    /// Without a trap, relayed errors are dropped.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Set a callback receiving relayed errors.
    ///
    /// Shorthand for `trap(FnTrap::new(f))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logtrail::Config;
    /// use logtrail::ErrorKind;
    ///
    /// let config = Config::new("my_logs").trap_fn(|err| {
    ///     if err.kind() == ErrorKind::DirectoryNotAccessible {
    ///         eprintln!("cannot write logs: {}", err.message());
    ///     }
    /// });
    /// ```
    pub fn trap_fn<F>(self, f: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.trap(FnTrap::new(f))
    }

    /// Set the console sink for mirrored lines.
    ///
    /// Default to a colored [`Stdout`].
    pub fn console(mut self, console: impl Into<Box<dyn Console>>) -> Self {
        self.console = console.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
