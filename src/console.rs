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

//! Console sinks that mirror logged lines.

use std::fmt;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use colored::Color;

use crate::Emphasis;
use crate::color::EmphasisColor;

/// A console sink that receives every mirrored line.
///
/// Console output is best effort: failures to write are ignored.
pub trait Console: fmt::Debug + Send + Sync + 'static {
    /// Mirror a batch of lines, in order.
    fn mirror(&self, lines: &[(&str, Emphasis)]);
}

impl<T: Console> From<T> for Box<dyn Console> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

macro_rules! colored_console {
    ($(#[$attr:meta])* $name:ident, $stream:path) => {
        $(#[$attr])*
        #[derive(Debug, Default)]
        pub struct $name {
            colors: EmphasisColor,
            no_color: bool,
        }

        impl $name {
            /// Customize the color of warning lines. Default to yellow.
            ///
            /// No effect if `no_color` is set.
            pub fn warning_color(mut self, color: Color) -> Self {
                self.colors.warning = color;
                self
            }

            /// Customize the color of critical lines. Default to bright red.
            ///
            /// No effect if `no_color` is set.
            pub fn critical_color(mut self, color: Color) -> Self {
                self.colors.critical = color;
                self
            }

            /// Customize the color of muted lines. Default to bright black.
            ///
            /// No effect if `no_color` is set.
            pub fn muted_color(mut self, color: Color) -> Self {
                self.colors.muted = color;
                self
            }

            /// Disable colored output.
            pub fn no_color(mut self) -> Self {
                self.no_color = true;
                self
            }
        }

        impl Console for $name {
            fn mirror(&self, lines: &[(&str, Emphasis)]) {
                let mut stream = $stream().lock();
                for (line, emphasis) in lines {
                    let line = self.colors.colorize_line(self.no_color, line, *emphasis);
                    let _ = writeln!(stream, "{line}");
                }
                let _ = stream.flush();
            }
        }
    };
}

colored_console!(
    /// A console sink that prints mirrored lines to stdout.
    ///
    /// # Examples
    ///
    /// ```
    /// use logtrail::console::Stdout;
    ///
    /// let console = Stdout::default().no_color();
    /// ```
    Stdout,
    io::stdout
);

colored_console!(
    /// A console sink that prints mirrored lines to stderr.
    Stderr,
    io::stderr
);

/// A console sink that keeps mirrored lines in memory.
///
/// Clones share the same buffer, so one clone can be handed to a logger while another
/// inspects what was mirrored.
///
/// # Examples
///
/// ```
/// use logtrail::console::Testing;
///
/// let console = Testing::default();
/// assert!(console.lines().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Testing {
    lines: Arc<Mutex<Vec<(String, Emphasis)>>>,
}

impl Testing {
    /// Return the mirrored lines in the order they arrived.
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(line, _)| line).collect()
    }

    /// Return the mirrored lines along with their emphasis.
    pub fn entries(&self) -> Vec<(String, Emphasis)> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Console for Testing {
    fn mirror(&self, lines: &[(&str, Emphasis)]) {
        let mut buffer = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        buffer.extend(lines.iter().map(|(line, e)| (line.to_string(), *e)));
    }
}
