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

//! Generation-based rotation of the log directory.
//!
//! A log directory holds at most three generations:
//!
//! * `log.txt`, the file of the running session;
//! * `log1.txt`, the file of the previous session;
//! * `log2.txt`, the file of the session before that.
//!
//! Every new session shifts each generation one slot older and drops the oldest. Any other
//! layout of files whose name contains `log` is considered inconsistent, and all of those
//! files are removed.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;

/// The substring that makes a file part of the rotation.
const LOG_MARKER: &str = "log";

/// A retained log file, ranked by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generation {
    /// `log.txt`
    Active,
    /// `log1.txt`
    Previous,
    /// `log2.txt`
    Oldest,
}

impl Generation {
    /// All generations, youngest first.
    pub const ALL: [Generation; 3] = [Generation::Active, Generation::Previous, Generation::Oldest];

    /// The file name of this generation.
    pub const fn file_name(self) -> &'static str {
        match self {
            Generation::Active => "log.txt",
            Generation::Previous => "log1.txt",
            Generation::Oldest => "log2.txt",
        }
    }

    /// The path of this generation inside `dir`.
    pub fn path(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Make room for a fresh `log.txt` in `dir` and return its path.
///
/// The directory is created if missing. The returned file does not exist yet; the first
/// append of the session creates it.
///
/// # Errors
///
/// Return a [`DirectoryNotAccessible`](crate::ErrorKind::DirectoryNotAccessible) error if the
/// directory cannot be created or listed, or a file in it cannot be renamed or removed.
pub fn prepare_log_file(dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|err| {
        Error::directory_not_accessible("failed to create log directory", dir, err)
    })?;

    let files = list_logfiles(dir)?;
    let names = files
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .collect::<BTreeSet<_>>();

    match files.len() {
        0 => {}
        n @ 1..=3 if is_exact_set(&names, &Generation::ALL[..n]) => {
            shift(dir, &Generation::ALL[..n])?
        }
        _ => {
            for file in &files {
                fs::remove_file(file).map_err(|err| {
                    Error::directory_not_accessible("failed to remove stray log", file, err)
                })?;
            }
        }
    }

    Ok(Generation::Active.path(dir))
}

/// Return the generations currently present in `dir`, youngest first.
///
/// A missing directory has no generations.
pub fn generations(dir: impl AsRef<Path>) -> Vec<Generation> {
    let dir = dir.as_ref();
    Generation::ALL
        .into_iter()
        .filter(|g| g.path(dir).is_file())
        .collect()
}

fn is_exact_set(names: &BTreeSet<&str>, generations: &[Generation]) -> bool {
    names.len() == generations.len()
        && generations
            .iter()
            .all(|g| names.contains(g.file_name()))
}

// move every generation one slot older, dropping the oldest if it is part of the set
fn shift(dir: &Path, generations: &[Generation]) -> Result<(), Error> {
    if generations.contains(&Generation::Oldest) {
        let oldest = Generation::Oldest.path(dir);
        fs::remove_file(&oldest).map_err(|err| {
            Error::directory_not_accessible("failed to remove oldest log", &oldest, err)
        })?;
    }

    let renames = [
        (Generation::Previous, Generation::Oldest),
        (Generation::Active, Generation::Previous),
    ];
    for (from, to) in renames {
        if !generations.contains(&from) {
            continue;
        }
        let (from, to) = (from.path(dir), to.path(dir));
        fs::rename(&from, &to).map_err(|err| {
            Error::directory_not_accessible("failed to rotate log", &from, err)
                .with_context("target", to.display())
        })?;
    }

    Ok(())
}

fn list_logfiles(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let read_dir = fs::read_dir(dir)
        .map_err(|err| Error::directory_not_accessible("failed to read log dir", dir, err))?;

    let mut files = vec![];
    for entry in read_dir {
        let entry = entry
            .map_err(|err| Error::directory_not_accessible("failed to read log dir", dir, err))?;

        // only regular files take part in rotation
        let is_file = entry.file_type().is_ok_and(|t| t.is_file());
        if !is_file {
            continue;
        }

        let filename = entry.file_name();
        if filename.to_string_lossy().contains(LOG_MARKER) {
            files.push(entry.path());
        }
    }

    Ok(files)
}
