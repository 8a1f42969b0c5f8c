use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SCORE_BAR_HEIGHT: u16 = 3;

pub struct QuizLayout {
    pub score_area: Rect,
    pub counter_area: Rect,
    pub divider_area: Rect,
    pub question_area: Rect,
    pub choices_area: Rect,
    pub next_area: Rect,
    pub help_area: Rect,
}

/// Splits the quiz screen. The score bar row collapses to zero height until
/// it is shown.
pub fn calculate_quiz_chunks(area: Rect, show_score: bool) -> QuizLayout {
    let score_height = if show_score { SCORE_BAR_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(score_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Percentage(30),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        score_area: chunks[0],
        counter_area: chunks[1],
        divider_area: chunks[2],
        question_area: chunks[3],
        choices_area: chunks[4],
        next_area: chunks[5],
        help_area: chunks[6],
    }
}

/// A box of `width` x `height` centred inside `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
