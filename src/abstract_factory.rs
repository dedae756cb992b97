//! Abstract Factory: one factory per platform, producing a matching family of
//! widgets.
//!
//! Run with: cargo run --bin p3_abstract_factory

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Web,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Web];

    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Platform::Windows => Box::new(WindowsFactory),
            Platform::Web => Box::new(WebFactory),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("Windows"),
            Platform::Web => f.write_str("Web"),
        }
    }
}

impl FromStr for Platform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "web" => Ok(Platform::Web),
            _ => Err(PatternError::UnknownPlatform(s.to_string())),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
    fn platform(&self) -> Platform;
}

pub trait Checkbox {
    fn render(&self) -> String;
    fn platform(&self) -> Platform;
}

pub struct WindowsButton;
impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering Windows Button".to_string()
    }
    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

pub struct WebButton;
impl Button for WebButton {
    fn render(&self) -> String {
        "Rendering Web Button".to_string()
    }
    fn platform(&self) -> Platform {
        Platform::Web
    }
}

pub struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Rendering Windows Checkbox".to_string()
    }
    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

pub struct WebCheckbox;
impl Checkbox for WebCheckbox {
    fn render(&self) -> String {
        "Rendering Web Checkbox".to_string()
    }
    fn platform(&self) -> Platform {
        Platform::Web
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct WebFactory;
impl GuiFactory for WebFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WebButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WebCheckbox)
    }
}

/// Works with any factory without naming a concrete widget type.
pub fn client_code(factory: &dyn GuiFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![
        format!("Button: {}", button.render()),
        format!("Checkbox: {}", checkbox.render()),
    ]
}

pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();
    for (i, platform) in Platform::ALL.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("Using {} GUI factory:", platform));
        lines.extend(client_code(platform.factory().as_ref()));
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
