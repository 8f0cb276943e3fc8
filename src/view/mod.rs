//! # View Models
//!
//! What a form shows, as plain values instead of markup.
//!
//! Every form owns a [`StatusLine`] and a detail [`Panel`]. Controllers write
//! them; front ends (the CLI in `main.rs`) only read and print them.

pub mod cards;

pub use cards::*;

use std::fmt;

/// Colour of a status line. Follows the form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusColor {
    #[default]
    Neutral,
    Blue,
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub text: String,
    pub color: StatusColor,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, color: StatusColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Contents of a form's detail area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Empty,
    Loading,
    Product(ProductCard),
    RawText(RawTextCard),
    Error(ErrorCard),
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Empty => Ok(()),
            Panel::Loading => writeln!(f, "Loading..."),
            Panel::Product(card) => fmt::Display::fmt(card, f),
            Panel::RawText(card) => fmt::Display::fmt(card, f),
            Panel::Error(card) => fmt::Display::fmt(card, f),
        }
    }
}
