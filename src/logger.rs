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

use std::mem;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Config;
use crate::Emphasis;
use crate::Error;
use crate::ErrorKind;
use crate::MessageType;
use crate::clock::Clock;
use crate::config::QueueMirror;
use crate::console::Console;
use crate::file;
use crate::layout::DASHED_LINE;
use crate::layout::LineLayout;
use crate::rotation;
use crate::trap::Dispatcher;

/// A logger writing prefixed lines to a rotated `log.txt`.
///
/// A logger starts without a session. [`initialize`](Logger::initialize) rotates the log
/// directory, writes a header and opens a session; [`end`](Logger::end) writes a footer and
/// closes it. Every logging operation outside a session fails with
/// [`SessionNotInitialized`](ErrorKind::SessionNotInitialized).
///
/// Failures are surfaced according to the [`ErrorPolicy`](crate::trap::ErrorPolicy) of the
/// last initialization: returned as `Err`, or relayed to a [`Trap`](crate::trap::Trap) while
/// the operation reports `Ok(())`.
///
/// All operations lock the session state, so a logger can be shared between threads, and
/// [`Logger::new`] is `const` so it can live in a `static`.
///
/// # Examples
///
/// ```
/// use logtrail::Config;
/// use logtrail::Logger;
/// use logtrail::MessageType;
///
/// # let dir = tempfile::tempdir().unwrap();
/// static LOGGER: Logger = Logger::new();
///
/// LOGGER.initialize(Config::new(dir.path())).unwrap();
/// LOGGER.log(MessageType::Alert, "cache is cold").unwrap();
/// LOGGER.log(MessageType::AlertSub, "warming up").unwrap();
/// LOGGER.end().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    // outlives the session, so usage errors still have somewhere to go
    dispatcher: Option<Arc<Dispatcher>>,
    session: Option<Session>,
}

impl Logger {
    /// Create a logger without a session.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                dispatcher: None,
                session: None,
            }),
        }
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a session.
    ///
    /// Rotate the configured directory, then write the session header to a fresh `log.txt`.
    ///
    /// A session that is still running is ended first. If its footer cannot be written, the
    /// error does not fail this call: it is handed to the new trap, whatever the policy, and
    /// counted in the new session's error count.
    ///
    /// # Errors
    ///
    /// Under [`ErrorPolicy::Throw`](crate::trap::ErrorPolicy::Throw), return a
    /// [`DirectoryNotAccessible`](ErrorKind::DirectoryNotAccessible) error if the directory
    /// cannot be rotated or the header cannot be written. The logger has no session
    /// afterward.
    pub fn initialize(&self, config: Config) -> Result<(), Error> {
        let Config {
            directory,
            mirror_console,
            timestamps,
            queue_mirror,
            error_policy,
            trap,
            console,
            clock,
        } = config;
        let dispatcher = Arc::new(Dispatcher::new(error_policy, trap));

        let (finished, result) = {
            let mut inner = self.inner();
            inner.dispatcher = Some(dispatcher.clone());
            let finished = match inner.session.take() {
                Some(previous) => previous.finish().err(),
                None => None,
            };

            let started = rotation::prepare_log_file(&directory).and_then(|path| {
                let mut session = Session {
                    path,
                    mirror_console,
                    layout: LineLayout::new(timestamps),
                    queue_mirror,
                    console,
                    clock,
                    queue: vec![],
                    error_count: 0,
                };
                session.begin()?;
                Ok(session)
            });

            match started {
                Ok(mut session) => {
                    if finished.is_some() {
                        session.error_count += 1;
                    }
                    inner.session = Some(session);
                    (finished, Ok(()))
                }
                Err(err) => (finished, Err(err)),
            }
        };

        if let Some(err) = finished {
            dispatcher.relay(&err);
        }
        match result {
            Ok(()) => Ok(()),
            Err(err) => dispatcher.dispatch(err),
        }
    }

    /// End the session.
    ///
    /// Write the session footer and reset the logger to its uninitialized state. Queued lines
    /// that were not executed are discarded. Ending a logger without a session dispatches
    /// [`SessionNotInitialized`](ErrorKind::SessionNotInitialized) and writes nothing.
    pub fn end(&self) -> Result<(), Error> {
        let (dispatcher, result) = {
            let mut inner = self.inner();
            let result = match inner.session.take() {
                Some(session) => session.finish(),
                None => Err(Error::session_not_initialized()),
            };
            (inner.dispatcher.clone(), result)
        };
        dispatch(dispatcher, result)
    }

    /// Whether a session is running.
    pub fn is_initialized(&self) -> bool {
        self.inner().session.is_some()
    }

    /// The path of the active log file, if a session is running.
    pub fn active_path(&self) -> Option<PathBuf> {
        self.inner().session.as_ref().map(|s| s.path.clone())
    }

    /// The number of file system failures in the running session.
    pub fn error_count(&self) -> Option<usize> {
        self.inner().session.as_ref().map(|s| s.error_count)
    }

    /// The number of queued lines waiting for [`queue_execute`](Logger::queue_execute).
    pub fn queue_len(&self) -> usize {
        self.inner().session.as_ref().map_or(0, |s| s.queue.len())
    }

    /// Log a message with the given type.
    ///
    /// A message containing newlines is written as several lines; the lines after the first
    /// carry the prefix of [`ty.sub()`](MessageType::sub).
    pub fn log(&self, ty: MessageType, text: &str) -> Result<(), Error> {
        self.with_session(|session| {
            let entry = session.format(ty, text);
            session.emit(vec![entry])
        })
    }

    /// Log a [`General`](MessageType::General) message.
    pub fn log_general(&self, text: &str) -> Result<(), Error> {
        self.log(MessageType::General, text)
    }

    /// Log several messages of the same type with a single file write.
    pub fn log_batch<S: AsRef<str>>(&self, ty: MessageType, texts: &[S]) -> Result<(), Error> {
        self.with_session(|session| {
            let entries = texts
                .iter()
                .map(|text| session.format(ty, text.as_ref()))
                .collect();
            session.emit(entries)
        })
    }

    /// Log several messages with a single file write, formatting `texts[i]` with `types[i]`.
    ///
    /// Texts past the end of `types` reuse the last type; with no types at all, they are
    /// formatted as [`General`](MessageType::General). Extra types are ignored.
    pub fn log_each<S: AsRef<str>>(&self, types: &[MessageType], texts: &[S]) -> Result<(), Error> {
        self.with_session(|session| {
            let mut ty = MessageType::General;
            let entries = texts
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    if let Some(next) = types.get(i) {
                        ty = *next;
                    }
                    session.format(ty, text.as_ref())
                })
                .collect();
            session.emit(entries)
        })
    }

    /// Format a message and keep it in memory until [`queue_execute`](Logger::queue_execute).
    ///
    /// The line is mirrored right away if the session mirrors the console with
    /// [`QueueMirror::OnAdd`].
    pub fn queue_add(&self, ty: MessageType, text: &str) -> Result<(), Error> {
        self.with_session(|session| {
            session.enqueue(ty, text);
            Ok(())
        })
    }

    /// Queue a [`General`](MessageType::General) message.
    pub fn queue_add_general(&self, text: &str) -> Result<(), Error> {
        self.queue_add(MessageType::General, text)
    }

    /// Append every queued line to the log file with a single write and clear the queue.
    ///
    /// The queue is cleared even if the write fails.
    pub fn queue_execute(&self) -> Result<(), Error> {
        self.with_session(Session::flush_queue)
    }

    /// Append an empty line.
    pub fn divider(&self) -> Result<(), Error> {
        self.with_session(|session| session.emit(vec![(String::new(), Emphasis::Normal)]))
    }

    /// Append a line of 46 dashes.
    pub fn divider_dashed_line(&self) -> Result<(), Error> {
        self.with_session(|session| session.emit(vec![dashed_line()]))
    }

    fn with_session<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Session) -> Result<(), Error>,
    {
        let (dispatcher, result) = {
            let mut inner = self.inner();
            let result = match inner.session.as_mut() {
                None => Err(Error::session_not_initialized()),
                Some(session) => f(session).inspect_err(|err| {
                    if err.kind() == ErrorKind::DirectoryNotAccessible {
                        session.error_count += 1;
                    }
                }),
            };
            (inner.dispatcher.clone(), result)
        };
        dispatch(dispatcher, result)
    }
}

// runs after the session lock is released
fn dispatch(dispatcher: Option<Arc<Dispatcher>>, result: Result<(), Error>) -> Result<(), Error> {
    match (result, dispatcher) {
        (Ok(()), _) => Ok(()),
        (Err(err), Some(dispatcher)) => dispatcher.dispatch(err),
        (Err(err), None) => Dispatcher::default().dispatch(err),
    }
}

fn dashed_line() -> (String, Emphasis) {
    (DASHED_LINE.to_string(), Emphasis::Normal)
}

fn toggle(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

#[derive(Debug)]
struct Pending {
    line: String,
    emphasis: Emphasis,
    mirrored: bool,
}

#[derive(Debug)]
struct Session {
    path: PathBuf,
    mirror_console: bool,
    layout: LineLayout,
    queue_mirror: QueueMirror,
    console: Box<dyn Console>,
    clock: Clock,
    queue: Vec<Pending>,
    error_count: usize,
}

impl Session {
    fn format(&self, ty: MessageType, text: &str) -> (String, Emphasis) {
        let line = self.layout.format(&self.clock.now(), ty, text);
        (line, ty.emphasis())
    }

    // file first; the console only sees lines that reached the file
    fn emit(&self, entries: Vec<(String, Emphasis)>) -> Result<(), Error> {
        let lines = entries.iter().map(|(line, _)| line).collect::<Vec<_>>();
        file::append_lines(&self.path, &lines)?;
        self.mirror(entries.iter().map(|(line, e)| (line.as_str(), *e)));
        Ok(())
    }

    fn mirror<'a>(&self, lines: impl Iterator<Item = (&'a str, Emphasis)>) {
        if self.mirror_console {
            let lines = lines.collect::<Vec<_>>();
            if !lines.is_empty() {
                self.console.mirror(&lines);
            }
        }
    }

    fn enqueue(&mut self, ty: MessageType, text: &str) {
        let (line, emphasis) = self.format(ty, text);
        let mirrored = self.mirror_console && self.queue_mirror == QueueMirror::OnAdd;
        if mirrored {
            self.console.mirror(&[(line.as_str(), emphasis)]);
        }
        self.queue.push(Pending {
            line,
            emphasis,
            mirrored,
        });
    }

    fn flush_queue(&mut self) -> Result<(), Error> {
        let queue = mem::take(&mut self.queue);
        let lines = queue.iter().map(|p| p.line.as_str()).collect::<Vec<_>>();
        file::append_lines(&self.path, &lines)?;
        self.mirror(
            queue
                .iter()
                .filter(|p| !p.mirrored)
                .map(|p| (p.line.as_str(), p.emphasis)),
        );
        Ok(())
    }

    fn begin(&mut self) -> Result<(), Error> {
        let started = self.clock.now().strftime("%Y-%m-%d %H:%M:%S");
        let entries = vec![
            dashed_line(),
            self.format(MessageType::Maintenance, "Logger initialized."),
            self.format(
                MessageType::MaintenanceSub,
                &format!("Console mirroring: {}", toggle(self.mirror_console)),
            ),
            self.format(MessageType::MaintenanceSub, &log_file_line(&self.path)),
            self.format(MessageType::MaintenanceSub, &format!("Started: {started} UTC")),
            dashed_line(),
        ];
        self.emit(entries)
    }

    fn finish(self) -> Result<(), Error> {
        let finished = self.clock.now().strftime("%Y-%m-%d %H:%M:%S");
        let mut entries = vec![
            dashed_line(),
            self.format(MessageType::Maintenance, "Logger finished."),
        ];
        if self.error_count > 0 {
            entries.push(self.format(
                MessageType::HighAlertSub,
                &format!("Errors: {}", self.error_count),
            ));
        }
        entries.push(self.format(MessageType::MaintenanceSub, &log_file_line(&self.path)));
        entries.push(self.format(
            MessageType::MaintenanceSub,
            &format!("Finished: {finished} UTC"),
        ));
        entries.push(dashed_line());
        self.emit(entries)
    }
}

fn log_file_line(path: &Path) -> String {
    format!("Log file: {}", path.display())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::sync::Mutex;

    use jiff::Zoned;
    use tempfile::TempDir;

    use super::*;
    use crate::clock::ManualClock;
    use crate::console::Testing;
    use crate::trap::ErrorPolicy;
    use crate::trap::FnTrap;

    fn config(dir: &Path) -> Config {
        let now = Zoned::from_str("2024-08-10T09:30:15[UTC]").unwrap();
        Config::new(dir).clock(Clock::ManualClock(ManualClock::new(now)))
    }

    fn body(path: &Path) -> Vec<String> {
        // skip the six header lines
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .skip(6)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_and_footer() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger.initialize(config(temp_dir.path())).unwrap();
        let path = logger.active_path().unwrap();
        logger.end().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let expected = format!(
            "{DASHED_LINE}\n\
             ~Logger initialized.\n\
             ~ |Console mirroring: disabled\n\
             ~ |Log file: {path}\n\
             ~ |Started: 2024-08-10 09:30:15 UTC\n\
             {DASHED_LINE}\n\
             {DASHED_LINE}\n\
             ~Logger finished.\n\
             ~ |Log file: {path}\n\
             ~ |Finished: 2024-08-10 09:30:15 UTC\n\
             {DASHED_LINE}\n",
            path = path.display()
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn test_every_type_prefixes_its_line() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger.initialize(config(temp_dir.path())).unwrap();
        for ty in MessageType::ALL {
            logger.log(ty, "x").unwrap();
        }

        let lines = body(&logger.active_path().unwrap());
        insta::assert_snapshot!(lines.join("\n"), @r"
        x
         |x
        !x
        ! |x
        !!x
        !! |x
        ~x
        ~ |x
        ");
    }

    #[test]
    fn test_timestamped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger
            .initialize(config(temp_dir.path()).timestamps(true))
            .unwrap();
        logger.log(MessageType::HighAlert, "disk full").unwrap();

        let lines = body(&logger.active_path().unwrap());
        assert_eq!(lines, ["[09:30:15] !!disk full"]);
    }

    #[test]
    fn test_log_each_reuses_last_type() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger.initialize(config(temp_dir.path())).unwrap();
        logger
            .log_each(&[MessageType::Alert], &["a", "b", "c"])
            .unwrap();
        logger
            .log_each(
                &[MessageType::HighAlert, MessageType::GeneralSub],
                &["d", "e", "f"],
            )
            .unwrap();
        logger.log_each(&[], &["g"]).unwrap();
        logger
            .log_each(&[MessageType::Alert, MessageType::Alert], &["h"])
            .unwrap();

        let lines = body(&logger.active_path().unwrap());
        assert_eq!(lines, ["!a", "!b", "!c", "!!d", " |e", " |f", "g", "!h"]);
    }

    #[test]
    fn test_log_batch_uses_one_type() {
        let temp_dir = TempDir::new().unwrap();
        let console = Testing::default();
        let logger = Logger::new();
        logger
            .initialize(
                config(temp_dir.path())
                    .mirror_console(true)
                    .console(console.clone()),
            )
            .unwrap();
        logger
            .log_batch(MessageType::MaintenanceSub, &["one".to_string(), "two".to_string()])
            .unwrap();

        let lines = body(&logger.active_path().unwrap());
        assert_eq!(lines, ["~ |one", "~ |two"]);
        let mirrored = console.entries();
        assert_eq!(
            &mirrored[6..],
            [
                ("~ |one".to_string(), Emphasis::Muted),
                ("~ |two".to_string(), Emphasis::Muted)
            ]
        );
    }

    #[test]
    fn test_queue_flush_order_and_reset() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger.initialize(config(temp_dir.path())).unwrap();
        let path = logger.active_path().unwrap();

        logger.queue_add_general("1").unwrap();
        logger.queue_add(MessageType::Alert, "2").unwrap();
        assert_eq!(logger.queue_len(), 2);
        assert!(body(&path).is_empty());

        logger.queue_execute().unwrap();
        assert_eq!(logger.queue_len(), 0);
        assert_eq!(body(&path), ["1", "!2"]);

        logger.queue_execute().unwrap();
        assert_eq!(body(&path), ["1", "!2"]);
    }

    #[test]
    fn test_queue_mirrors_after_execute_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let console = Testing::default();
        let logger = Logger::new();
        logger
            .initialize(
                config(temp_dir.path())
                    .mirror_console(true)
                    .console(console.clone()),
            )
            .unwrap();
        let header = console.lines().len();

        logger.queue_add_general("queued").unwrap();
        assert_eq!(console.lines().len(), header);
        logger.queue_execute().unwrap();
        assert_eq!(console.lines()[header..], ["queued"]);
    }

    #[test]
    fn test_queue_mirrors_on_add() {
        let temp_dir = TempDir::new().unwrap();
        let console = Testing::default();
        let logger = Logger::new();
        logger
            .initialize(
                config(temp_dir.path())
                    .mirror_console(true)
                    .queue_mirror(QueueMirror::OnAdd)
                    .console(console.clone()),
            )
            .unwrap();
        let header = console.lines().len();

        logger.queue_add_general("a").unwrap();
        logger.queue_add_general("b").unwrap();
        assert_eq!(console.lines()[header..], ["a", "b"]);

        logger.queue_execute().unwrap();
        assert_eq!(console.lines()[header..], ["a", "b"]);
        assert_eq!(body(&logger.active_path().unwrap()), ["a", "b"]);
    }

    #[test]
    fn test_dividers() {
        let temp_dir = TempDir::new().unwrap();
        let console = Testing::default();
        let logger = Logger::new();
        logger
            .initialize(
                config(temp_dir.path())
                    .mirror_console(true)
                    .console(console.clone()),
            )
            .unwrap();
        logger.divider().unwrap();
        logger.divider_dashed_line().unwrap();

        assert_eq!(body(&logger.active_path().unwrap()), ["", DASHED_LINE]);
        assert_eq!(console.lines()[6..], ["", DASHED_LINE]);
    }

    #[test]
    fn test_without_mirroring_console_stays_silent() {
        let temp_dir = TempDir::new().unwrap();
        let console = Testing::default();
        let logger = Logger::new();
        logger
            .initialize(config(temp_dir.path()).console(console.clone()))
            .unwrap();
        logger.log_general("quiet").unwrap();
        logger.queue_add_general("quiet").unwrap();
        logger.queue_execute().unwrap();
        logger.end().unwrap();

        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_gated_before_initialize_and_after_end() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger
            .initialize(config(temp_dir.path()).error_policy(ErrorPolicy::Throw))
            .unwrap();
        logger.end().unwrap();

        let err = logger.log_general("late").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SessionNotInitialized);
        let err = logger.queue_add_general("late").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SessionNotInitialized);
        assert!(!logger.is_initialized());
        assert_eq!(logger.active_path(), None);

        let fresh = Logger::new();
        // relayed without a trap
        assert!(fresh.log_general("early").is_ok());
    }

    #[test]
    fn test_end_twice() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger
            .initialize(config(temp_dir.path()).error_policy(ErrorPolicy::Throw))
            .unwrap();
        let path = logger.active_path().unwrap();
        logger.end().unwrap();
        let written = fs::read_to_string(&path).unwrap();

        let err = logger.end().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SessionNotInitialized);
        assert_eq!(fs::read_to_string(&path).unwrap(), written);
    }

    #[test]
    fn test_write_failures_are_counted_and_relayed() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("Logs");
        let seen = Arc::new(Mutex::new(vec![]));
        let trap = FnTrap::new({
            let seen = seen.clone();
            move |err: &Error| seen.lock().unwrap().push(err.kind())
        });

        let logger = Logger::new();
        logger.initialize(config(&dir).trap(trap)).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        logger.log_general("lost").unwrap();
        logger.queue_add_general("lost").unwrap();
        logger.queue_execute().unwrap();
        assert_eq!(logger.error_count(), Some(2));
        assert_eq!(logger.queue_len(), 0);

        logger.end().unwrap();
        logger.log_general("after").unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            [
                ErrorKind::DirectoryNotAccessible,
                ErrorKind::DirectoryNotAccessible,
                ErrorKind::DirectoryNotAccessible,
                ErrorKind::SessionNotInitialized,
            ]
        );
    }

    #[test]
    fn test_footer_reports_errors() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("Logs");
        let logger = Logger::new();
        logger.initialize(config(&dir)).unwrap();
        let path = logger.active_path().unwrap();

        // a directory squatting on the log file name makes appends fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        logger.log_general("lost").unwrap();
        fs::remove_dir(&path).unwrap();

        logger.end().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("~Logger finished.\n!! |Errors: 1\n"), "{content}");
    }

    #[test]
    fn test_throw_policy_fails_initialize_on_bad_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        let logger = Logger::new();
        let err = logger
            .initialize(config(&file).error_policy(ErrorPolicy::Throw))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DirectoryNotAccessible);
        assert!(!logger.is_initialized());

        let err = logger.log_general("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SessionNotInitialized);
    }

    #[test]
    fn test_reinitialize_ends_running_session() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let logger = Logger::new();
        logger.initialize(config(dir)).unwrap();
        logger.log_general("first run").unwrap();
        logger.initialize(config(dir)).unwrap();

        let previous = fs::read_to_string(dir.join("log1.txt")).unwrap();
        assert!(previous.contains("first run\n"));
        assert!(previous.contains("~Logger finished.\n"));
        assert!(body(&dir.join("log.txt")).is_empty());
    }

    #[test]
    fn test_multiline_message_continues_with_sub_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::new();
        logger.initialize(config(temp_dir.path())).unwrap();
        logger.log(MessageType::Alert, "first\nsecond").unwrap();

        assert_eq!(body(&logger.active_path().unwrap()), ["!first", "! |second"]);
    }

    #[test]
    fn test_reinitialize_after_previous_directory_vanished() {
        let temp_dir = TempDir::new().unwrap();
        let old = temp_dir.path().join("old");
        let new = temp_dir.path().join("new");
        let seen = Arc::new(Mutex::new(vec![]));
        let trap = FnTrap::new({
            let seen = seen.clone();
            move |err: &Error| seen.lock().unwrap().push(err.kind())
        });

        let logger = Logger::new();
        logger
            .initialize(config(&old).error_policy(ErrorPolicy::Throw))
            .unwrap();
        fs::remove_dir_all(&old).unwrap();

        // the lost footer of the old session does not fail the new one
        logger
            .initialize(config(&new).error_policy(ErrorPolicy::Throw).trap(trap))
            .unwrap();
        assert!(logger.is_initialized());
        assert_eq!(logger.active_path(), Some(new.join("log.txt")));
        assert_eq!(logger.error_count(), Some(1));
        assert_eq!(*seen.lock().unwrap(), [ErrorKind::DirectoryNotAccessible]);

        logger.end().unwrap();
        let content = fs::read_to_string(new.join("log.txt")).unwrap();
        assert!(content.contains("!! |Errors: 1\n"), "{content}");
    }

    #[test]
    fn test_closure_registered_as_trap() {
        let temp_dir = TempDir::new().unwrap();
        let seen = Arc::new(Mutex::new(vec![]));
        let config = config(temp_dir.path()).trap_fn({
            let seen = seen.clone();
            move |err| seen.lock().unwrap().push(err.kind())
        });

        let logger = Logger::new();
        logger.initialize(config).unwrap();
        logger.end().unwrap();
        logger.end().unwrap();
        assert_eq!(*seen.lock().unwrap(), [ErrorKind::SessionNotInitialized]);
    }
}
