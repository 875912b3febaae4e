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

use crate::Logger;
use crate::MessageType;

/// The message type a record of the given level is logged with.
///
/// | Level   | Message type     |
/// |---------|------------------|
/// | `Error` | `HighAlert`      |
/// | `Warn`  | `Alert`          |
/// | `Info`  | `General`        |
/// | `Debug` | `Maintenance`    |
/// | `Trace` | `MaintenanceSub` |
pub fn message_type(level: log::Level) -> MessageType {
    match level {
        log::Level::Error => MessageType::HighAlert,
        log::Level::Warn => MessageType::Alert,
        log::Level::Info => MessageType::General,
        log::Level::Debug => MessageType::Maintenance,
        log::Level::Trace => MessageType::MaintenanceSub,
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let ty = message_type(record.level());
        let text = record.args().to_string();
        // thrown errors have no caller to return to
        let _ = Logger::log(self, ty, &text);
    }

    fn flush(&self) {}
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] with the given logger, and all logs from the log
/// crate will be written to its session. Records that arrive without a session are
/// dispatched as [`SessionNotInitialized`](crate::ErrorKind::SessionNotInitialized) errors.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// use logtrail::Logger;
///
/// static LOGGER: Logger = Logger::new();
///
/// if logtrail::bridge::try_setup_log_crate(&LOGGER).is_err() {
///     eprintln!("failed to set logger");
/// }
/// ```
pub fn try_setup_log_crate(logger: &'static Logger) -> Result<(), log::SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`] for details.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// use logtrail::Logger;
///
/// static LOGGER: Logger = Logger::new();
///
/// logtrail::bridge::setup_log_crate(&LOGGER);
/// ```
pub fn setup_log_crate(logger: &'static Logger) {
    try_setup_log_crate(logger).expect(
        "logtrail::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
