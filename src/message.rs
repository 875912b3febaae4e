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

//! Message types and their prefixes.

use std::fmt;
use std::str::FromStr;

/// The type of a logged message.
///
/// Each type owns a fixed prefix written in front of the message, and an [`Emphasis`] used
/// when the line is mirrored to the console.
///
/// | Type             | Prefix  | Emphasis |
/// |------------------|---------|----------|
/// | `General`        | `""`    | Normal   |
/// | `GeneralSub`     | `" \|"` | Normal   |
/// | `Alert`          | `"!"`   | Warning  |
/// | `AlertSub`       | `"! \|"`| Warning  |
/// | `HighAlert`      | `"!!"`  | Critical |
/// | `HighAlertSub`   | `"!! \|"`| Critical |
/// | `Maintenance`    | `"~"`   | Muted    |
/// | `MaintenanceSub` | `"~ \|"`| Muted    |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// A plain message.
    #[default]
    General,
    /// A detail line under a general message.
    GeneralSub,
    /// Something worth attention.
    Alert,
    /// A detail line under an alert.
    AlertSub,
    /// Something went wrong.
    HighAlert,
    /// A detail line under a high alert.
    HighAlertSub,
    /// Bookkeeping of the logger or the application.
    Maintenance,
    /// A detail line under a maintenance message.
    MaintenanceSub,
}

/// How a line is rendered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Plain text.
    Normal,
    /// Highlighted as a warning.
    Warning,
    /// Highlighted as a failure.
    Critical,
    /// Dimmed.
    Muted,
}

impl MessageType {
    /// All message types, in declaration order.
    pub const ALL: [MessageType; 8] = [
        MessageType::General,
        MessageType::GeneralSub,
        MessageType::Alert,
        MessageType::AlertSub,
        MessageType::HighAlert,
        MessageType::HighAlertSub,
        MessageType::Maintenance,
        MessageType::MaintenanceSub,
    ];

    /// The prefix written in front of messages of this type.
    pub const fn prefix(self) -> &'static str {
        match self {
            MessageType::General => "",
            MessageType::GeneralSub => " |",
            MessageType::Alert => "!",
            MessageType::AlertSub => "! |",
            MessageType::HighAlert => "!!",
            MessageType::HighAlertSub => "!! |",
            MessageType::Maintenance => "~",
            MessageType::MaintenanceSub => "~ |",
        }
    }

    /// The console emphasis of this type.
    pub const fn emphasis(self) -> Emphasis {
        match self {
            MessageType::General | MessageType::GeneralSub => Emphasis::Normal,
            MessageType::Alert | MessageType::AlertSub => Emphasis::Warning,
            MessageType::HighAlert | MessageType::HighAlertSub => Emphasis::Critical,
            MessageType::Maintenance | MessageType::MaintenanceSub => Emphasis::Muted,
        }
    }

    /// The detail-line counterpart of this type. Sub types map to themselves.
    pub const fn sub(self) -> MessageType {
        match self {
            MessageType::General | MessageType::GeneralSub => MessageType::GeneralSub,
            MessageType::Alert | MessageType::AlertSub => MessageType::AlertSub,
            MessageType::HighAlert | MessageType::HighAlertSub => MessageType::HighAlertSub,
            MessageType::Maintenance | MessageType::MaintenanceSub => MessageType::MaintenanceSub,
        }
    }

    /// Return the name of this type as a static string.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageType::General => "General",
            MessageType::GeneralSub => "GeneralSub",
            MessageType::Alert => "Alert",
            MessageType::AlertSub => "AlertSub",
            MessageType::HighAlert => "HighAlert",
            MessageType::HighAlertSub => "HighAlertSub",
            MessageType::Maintenance => "Maintenance",
            MessageType::MaintenanceSub => "MaintenanceSub",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown message type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMessageTypeError(String);

impl fmt::Display for ParseMessageTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message type: {}", self.0)
    }
}

impl std::error::Error for ParseMessageTypeError {}

impl FromStr for MessageType {
    type Err = ParseMessageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMessageTypeError(s.to_string()))
    }
}
