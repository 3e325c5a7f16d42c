use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skipped,
    Planned,
    Deploy,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Skipped) => theme::icons::SKIPPED,
            (true, Icon::Planned) => theme::icons::PLANNED,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Skipped) => theme::icons_ascii::SKIPPED,
            (false, Icon::Planned) => theme::icons_ascii::PLANNED,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Skipped | Icon::Planned => theme::colors::DIM,
            Icon::Deploy => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
