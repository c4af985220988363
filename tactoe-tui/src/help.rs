use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const KEYS: &str = "\
1-9         play that cell
arrows/hjkl move the cursor
enter/space play the cursor cell or jump to the selected move
tab         switch between board and history
n           new game
q/esc       quit";

/// Key reference drawn centered over the rest of the UI.
#[derive(Debug, Default)]
pub struct HelpPopup;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 66, 10);
        // clear what is underneath so the board does not bleed through
        Clear.render(area, buf);
        let block = Block::new()
            .title(Line::from("Keys"))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        Paragraph::new(KEYS)
            .wrap(Wrap { trim: false })
            .left_aligned()
            .block(block)
            .render(area, buf);
    }
}
