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

//! Color utilities.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Emphasis;

/// Colors for the console emphasis of each message type.
///
/// Lines with [`Emphasis::Normal`] are never colored.
#[derive(Debug, Clone)]
pub struct EmphasisColor {
    /// Color for warning lines.
    pub warning: Color,
    /// Color for critical lines.
    pub critical: Color,
    /// Color for muted lines.
    pub muted: Color,
}

impl Default for EmphasisColor {
    fn default() -> Self {
        Self {
            warning: Color::Yellow,
            critical: Color::BrightRed,
            muted: Color::BrightBlack,
        }
    }
}

impl EmphasisColor {
    /// Colorize a line.
    pub fn colorize_line(&self, no_color: bool, line: &str, emphasis: Emphasis) -> ColoredString {
        let color = match emphasis {
            _ if no_color => None,
            Emphasis::Normal => None,
            Emphasis::Warning => Some(self.warning),
            Emphasis::Critical => Some(self.critical),
            Emphasis::Muted => Some(self.muted),
        };
        match color {
            None => ColoredString::from(line),
            Some(color) => line.color(color),
        }
    }
}
