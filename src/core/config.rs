//! Score sheet configuration.
//!
//! The engine renders a frame's reported state with a small symbol set.
//! Hosts that draw their own boards can ignore the rendering and read
//! `FrameReport`s instead; hosts that want the textual form configure the
//! symbols here.
//!
//! ```
//! use rust_bowling::core::SheetConfig;
//!
//! let config = SheetConfig::default().with_miss('0').with_separator(' ');
//! assert_eq!(config.strike, 'X');
//! assert_eq!(config.miss, '0');
//! ```

use serde::{Deserialize, Serialize};

/// Symbols used when rendering a frame's throws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Marks a throw that cleared a full rack.
    pub strike: char,

    /// Marks the throw that cleared the rest of a rack.
    pub spare: char,

    /// Marks a gutter ball.
    pub miss: char,

    /// Placed between the throws of one frame.
    pub separator: char,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            strike: 'X',
            spare: '/',
            miss: '-',
            separator: '|',
        }
    }
}

impl SheetConfig {
    /// Create a config with the conventional symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strike symbol.
    #[must_use]
    pub fn with_strike(mut self, symbol: char) -> Self {
        self.strike = symbol;
        self
    }

    /// Set the spare symbol.
    #[must_use]
    pub fn with_spare(mut self, symbol: char) -> Self {
        self.spare = symbol;
        self
    }

    /// Set the miss symbol.
    #[must_use]
    pub fn with_miss(mut self, symbol: char) -> Self {
        self.miss = symbol;
        self
    }

    /// Set the throw separator.
    #[must_use]
    pub fn with_separator(mut self, symbol: char) -> Self {
        self.separator = symbol;
        self
    }
}
