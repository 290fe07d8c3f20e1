use ratatui::style::{Color, Modifier, Style};
use stock_render::StyleClass;

/// Terminal rendering of each style class.
pub fn style_of(class: StyleClass) -> Style {
    match class {
        StyleClass::HeadingLarge => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        StyleClass::HeadingMedium => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        StyleClass::Body | StyleClass::TableCell => Style::default().fg(Color::Gray),
        StyleClass::BulletList | StyleClass::ListItem => Style::default().fg(Color::Gray),
        StyleClass::Table => Style::default().fg(Color::DarkGray),
        StyleClass::TableHead => Style::default().bg(Color::Rgb(40, 40, 40)),
        StyleClass::TableHeaderCell => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        StyleClass::Link => Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::UNDERLINED),
        StyleClass::Plain => Style::default(),
    }
}

pub fn inline_code() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn url_hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn chrome() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn error() -> Style {
    Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
}

pub fn spinner() -> Style {
    Style::default().fg(Color::LightBlue)
}
