//! Rendering for the picker

use super::list::FilterState;
use super::style::theme;
use super::{Phase, Picker};
use crate::config::PickerConfig;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';
const HELP_TEXT: &str = "↑/k up • ↓/j down • ←/→ page • / filter • enter select • q quit";
const FILTER_HELP_TEXT: &str = "enter select • tab apply filter • esc clear filter";

/// Draw the browsing screen into the frame
pub fn draw(frame: &mut Frame, picker: &Picker, config: &PickerConfig) {
    let area = frame.area();
    let height = area.height.min(config.list_height);
    let area = Rect { height, ..area };
    let paragraph = Paragraph::new(browse_lines(picker, config));
    frame.render_widget(paragraph, area);
}

fn browse_lines(picker: &Picker, config: &PickerConfig) -> Vec<Line<'static>> {
    let theme = theme();
    let list = picker.list();
    let width = usize::from(picker.width());
    let per_page = config.per_page();

    let mut lines = Vec::with_capacity(usize::from(config.list_height));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", config.title), theme.title),
    ]));
    lines.push(Line::default());
    lines.push(status_line(picker));

    let mut shown = 0;
    for (pos, entry) in list.page_entries() {
        let row = theme.row(pos == list.cursor(), entry.is_active());
        let text = format!("{}{}. {}", row.prefix, pos + 1, entry.title());
        lines.push(Line::styled(truncate(&text, width), row.style));
        shown += 1;
    }
    if list.visible_len() == 0 {
        lines.push(Line::styled("    No items.", theme.status));
        shown += 1;
    }
    lines.extend((shown..per_page).map(|_| Line::default()));

    lines.push(pagination_line(list.page(), list.total_pages()));
    let help = if list.filter_state() == FilterState::Filtering {
        FILTER_HELP_TEXT
    } else {
        HELP_TEXT
    };
    let help = truncate(help, width.saturating_sub(4));
    lines.push(Line::styled(format!("    {}", help), theme.help));
    lines
}

fn status_line(picker: &Picker) -> Line<'static> {
    let theme = theme();
    let list = picker.list();
    match list.filter_state() {
        FilterState::Filtering => Line::from(vec![
            Span::raw("  "),
            Span::styled("Filter: ", theme.filter_prompt),
            Span::raw(list.query().to_string()),
        ]),
        FilterState::Applied => Line::styled(
            format!(
                "  {} of {} “{}”",
                list.visible_len(),
                list.total_len(),
                list.query()
            ),
            theme.status,
        ),
        FilterState::Unfiltered => {
            let noun = if list.total_len() == 1 { "item" } else { "items" };
            Line::styled(format!("  {} {}", list.total_len(), noun), theme.status)
        }
    }
}

fn pagination_line(page: usize, total: usize) -> Line<'static> {
    let theme = theme();
    if total <= 1 {
        return Line::default();
    }
    let mut spans = vec![Span::raw("    ")];
    spans.extend((0..total).map(|i| {
        if i == page {
            Span::styled("•", theme.pagination_active)
        } else {
            Span::styled("•", theme.pagination_inactive)
        }
    }));
    Line::from(spans)
}

/// Cut `text` to at most `width` display columns, marking the cut
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Text shown once the picker has finished, `None` while browsing
pub fn outcome_text(phase: &Phase, config: &PickerConfig) -> Option<String> {
    match phase {
        Phase::Browsing => None,
        Phase::Confirmed { name } => Some(format!("Activating Context: {}", name)),
        Phase::Errored { message, .. } => Some(message.clone()),
        Phase::Cancelled => Some(config.farewell.to_string()),
    }
}
