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

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::Error;

/// Append lines to the file at `path` with a single write.
///
/// The file is created if missing and closed before returning. Nothing is written, and
/// the file is left untouched, when `lines` is empty.
pub(crate) fn append_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), Error> {
    if lines.is_empty() {
        return Ok(());
    }

    let mut bytes = Vec::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        bytes.extend_from_slice(line.as_ref().as_bytes());
        bytes.push(b'\n');
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|err| Error::directory_not_accessible("failed to open log file", path, err))?;
    file.write_all(&bytes)
        .and_then(|()| file.flush())
        .map_err(|err| Error::directory_not_accessible("failed to append to log file", path, err))
}
