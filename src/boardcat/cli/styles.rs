use console::Style;
use once_cell::sync::Lazy;

pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static BOARD: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static SHIELD: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static HIDDEN: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
pub static FRAGMENT: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
