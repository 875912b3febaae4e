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

//! Logtrail is an append-only text logger that keeps a short, fixed history of log files.
//!
//! # Overview
//!
//! Every session of a [`Logger`] writes to `log.txt` in its log directory. When a new session
//! starts, the previous file becomes `log1.txt` and the one before it `log2.txt`; older files
//! are dropped. Each line carries the prefix of its [`MessageType`], and can be mirrored to a
//! colored console. Lines can also be queued in memory and written to the file at once.
//!
//! # Examples
//!
//! ```
//! use logtrail::Config;
//! use logtrail::Logger;
//! use logtrail::MessageType;
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::new();
//! logger.initialize(Config::new(dir.path()).timestamps(true)).unwrap();
//!
//! logger.log(MessageType::General, "Loading assets").unwrap();
//! logger.log_batch(MessageType::GeneralSub, &["textures", "sounds"]).unwrap();
//!
//! logger.queue_add(MessageType::Maintenance, "cache hit").unwrap();
//! logger.queue_add(MessageType::Maintenance, "cache miss").unwrap();
//! logger.queue_execute().unwrap();
//!
//! logger.end().unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod console;
pub mod rotation;
pub mod trap;

mod clock;
mod color;
mod config;
mod error;
mod file;
mod layout;
mod logger;
mod message;

pub use self::color::EmphasisColor;
pub use self::config::Config;
pub use self::config::DEFAULT_DIRECTORY;
pub use self::config::QueueMirror;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::layout::DASHED_LINE;
pub use self::logger::Logger;
pub use self::message::Emphasis;
pub use self::message::MessageType;
pub use self::message::ParseMessageTypeError;
