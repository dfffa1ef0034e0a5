//! Terminal styling behind a small capability trait

use console::Style;
use is_terminal::IsTerminal;
use logpack_types::ColorChoice;

/// What a piece of output means, which decides its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Success,
    Error,
}

pub trait Colorize {
    fn colorize(&self, text: &str, role: Role) -> String;
}

/// ANSI escape styling: blue for success, red for errors
pub struct AnsiColors;

impl Colorize for AnsiColors {
    fn colorize(&self, text: &str, role: Role) -> String {
        let style = match role {
            Role::Success => Style::new().blue(),
            Role::Error => Style::new().red(),
        };
        style.force_styling(true).apply_to(text).to_string()
    }
}

pub struct PlainText;

impl Colorize for PlainText {
    fn colorize(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}

/// Pick the styling for stdout
pub fn palette(choice: ColorChoice) -> Box<dyn Colorize> {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if use_color(choice, std::io::stdout().is_terminal(), no_color) {
        Box::new(AnsiColors)
    } else {
        Box::new(PlainText)
    }
}

fn use_color(choice: ColorChoice, is_tty: bool, no_color: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_tty && !no_color,
    }
}
