// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, the animation
// indicator and the last refresh error, if any.

use crate::app::Dashboard;
use crate::theme::{GRASS_GREEN, ORCHID_PINK, SLATE, SNOW_WHITE, VIOLET};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
    color: Color,
}

const HINTS: [Hint; 5] = [
    Hint {
        priority: 1,
        key: "Q:",
        desc: "Quit | ",
        color: ORCHID_PINK,
    },
    Hint {
        priority: 1,
        key: "1-4:",
        desc: "Period | ",
        color: VIOLET,
    },
    Hint {
        priority: 1,
        key: "R:",
        desc: "Refresh | ",
        color: VIOLET,
    },
    Hint {
        priority: 2,
        key: "A:",
        desc: "Anim | ",
        color: VIOLET,
    },
    Hint {
        priority: 3,
        key: "←→:",
        desc: "Cycle period | ",
        color: VIOLET,
    },
];

/// Hint spans that fit in `available_width`, highest priority first
fn hint_spans(available_width: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current_length = 0;

    for priority in 1..=3 {
        for hint in HINTS.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.chars().count() + hint.desc.len();
            if current_length + hint_length <= available_width {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(hint.desc));
                current_length += hint_length;
            }
        }
    }

    spans
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &Dashboard) {
    // Subtract borders and icon
    let available_width = area.width.saturating_sub(6) as usize;

    let mut spans = vec![Span::styled(" 📊 ", Style::default().fg(VIOLET))];
    spans.extend(hint_spans(available_width.saturating_sub(40)));
    spans.push(Span::raw(" "));
    spans.extend(build_indicators(app));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(VIOLET)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Animation state, frame time, refresh counter and last refresh error
fn build_indicators(app: &Dashboard) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    let (anim_state, anim_color) = if app.field().is_running() {
        ("ON", GRASS_GREEN)
    } else {
        ("OFF", SNOW_WHITE)
    };
    spans.push(Span::styled("[A:", Style::default().fg(SNOW_WHITE)));
    spans.push(Span::styled(
        anim_state,
        Style::default().fg(anim_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(SNOW_WHITE)));

    spans.push(Span::styled(
        format!("{}ms ", app.last_frame_ms),
        Style::default().fg(SLATE),
    ));
    spans.push(Span::styled(
        format!("#{} ", app.metrics().refresh_count()),
        Style::default().fg(SLATE),
    ));

    if let Some(error) = &app.refresh_error {
        spans.push(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(ORCHID_PINK).add_modifier(Modifier::BOLD),
        ));
    }

    spans
}
