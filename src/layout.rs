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

use std::fmt::Write;

use jiff::Zoned;

use crate::MessageType;

/// The separator line written by dashed dividers and around session headers.
pub const DASHED_LINE: &str = "----------------------------------------------";

/// A layout that formats messages as prefixed text lines.
///
/// Output format:
///
/// ```text
/// [09:12:52] !!Disk is full
/// [09:12:52] !! |Free space: 0 bytes
/// ```
///
/// The `[HH:MM:SS] ` token is in UTC and only present when timestamps are enabled.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LineLayout {
    timestamps: bool,
}

impl LineLayout {
    pub(crate) fn new(timestamps: bool) -> Self {
        Self { timestamps }
    }

    /// Format `text` as one line, or as several when it contains newlines.
    ///
    /// Continuation lines carry the prefix of `ty.sub()`, so every line of the file starts
    /// with a prefix.
    pub(crate) fn format(&self, now: &Zoned, ty: MessageType, text: &str) -> String {
        let mut line = String::with_capacity(ty.prefix().len() + text.len() + 11);
        for (i, part) in text.split('\n').enumerate() {
            let prefix = if i == 0 {
                ty.prefix()
            } else {
                line.push('\n');
                ty.sub().prefix()
            };
            if self.timestamps {
                // SAFETY: write to a string always succeeds
                write!(&mut line, "[{}] ", now.strftime("%H:%M:%S")).unwrap();
            }
            line.push_str(prefix);
            line.push_str(part.strip_suffix('\r').unwrap_or(part));
        }
        line
    }
}
