use crate::models::{AnswerState, DataOrException, QuestionItem, QuestionSet};
use crate::quiz::QuizView;
use crate::ui::layout::{calculate_quiz_chunks, centered_rect};
use crate::utils::{dashed_line, truncate_to_width};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

const DARK_PURPLE: Color = Color::Rgb(0x23, 0x1e, 0x48);
const OFF_DARK_PURPLE: Color = Color::Rgb(0x4b, 0x3f, 0x85);
const LIGHT_PURPLE: Color = Color::Rgb(0xbe, 0x6b, 0xe5);
const PINK: Color = Color::Rgb(0xf9, 0x50, 0x75);
const LIGHT_BLUE: Color = Color::Rgb(0x5e, 0x8c, 0xf5);
const OFF_WHITE: Color = Color::Rgb(0xf0, 0xf0, 0xf0);
const LIGHT_GREY: Color = Color::Rgb(0xb4, 0xb4, 0xb4);

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Top-level quiz screen: spinner while loading, the current question once
/// data is in, an empty frame when the fetch produced nothing.
pub fn draw_questions(
    f: &mut Frame,
    state: &DataOrException<QuestionSet>,
    view: &QuizView,
    total_questions: usize,
    tick: usize,
) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(DARK_PURPLE)), area);

    if state.loading {
        draw_loading(f, tick);
        return;
    }

    match &state.data {
        Some(questions) => {
            draw_question_display(f, view.current_question(questions), view, total_questions)
        }
        None => f.render_widget(Block::default().borders(Borders::ALL), area),
    }
}

pub fn draw_loading(f: &mut Frame, tick: usize) {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let text = format!("{} Loading questions...", spinner);
    let area = centered_rect(f.area(), text.chars().count() as u16 + 4, 3);

    let loading = Paragraph::new(text)
        .style(Style::default().fg(OFF_WHITE))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, area);
}

pub fn draw_question_display(
    f: &mut Frame,
    question: Option<&QuestionItem>,
    view: &QuizView,
    total_questions: usize,
) {
    let layout = calculate_quiz_chunks(f.area(), view.shows_score_progress());

    if view.shows_score_progress() {
        let score = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(LIGHT_PURPLE)),
            )
            .gauge_style(Style::default().fg(PINK).bg(DARK_PURPLE))
            .ratio(view.score_progress())
            .label("");
        f.render_widget(score, layout.score_area);
    }

    let counter = Paragraph::new(format!(
        "Question {}/{}",
        view.question_index, total_questions
    ))
    .style(
        Style::default()
            .fg(LIGHT_GREY)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(counter, layout.counter_area);

    let divider = Paragraph::new(dashed_line(layout.divider_area.width as usize, 2, 1))
        .style(Style::default().fg(LIGHT_GREY));
    f.render_widget(divider, layout.divider_area);

    // Past the end of the set: nothing to show below the counter.
    let Some(question) = question else {
        return;
    };

    let mut question_block = Block::default().borders(Borders::NONE);
    if let Some(category) = &question.category {
        let max_width = layout.question_area.width.saturating_sub(2) as usize;
        question_block = question_block.title(truncate_to_width(category, max_width));
    }
    let prompt = Paragraph::new(question.question.as_deref().unwrap_or_default())
        .style(
            Style::default()
                .fg(OFF_WHITE)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
        .block(question_block);
    f.render_widget(prompt, layout.question_area);

    let choices: Vec<ListItem> = (0..question.choice_count())
        .map(|i| choice_item(question, view, i))
        .collect();
    let choice_list = List::new(choices).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(OFF_DARK_PURPLE)),
    );
    f.render_widget(choice_list, layout.choices_area);

    let next_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(layout.next_area);
    let next = Paragraph::new("Next")
        .style(Style::default().fg(OFF_WHITE).bg(LIGHT_BLUE))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(next, next_chunks[1]);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Move  "),
        Span::styled("Enter", key_style),
        Span::from(" Select  "),
        Span::styled("1-9", key_style),
        Span::from(" Pick  "),
        Span::styled("n", key_style),
        Span::from(" Next  "),
        Span::styled("Esc", key_style),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn choice_item<'a>(question: &'a QuestionItem, view: &QuizView, index: usize) -> ListItem<'a> {
    let is_selected = view.selected_choice == Some(index);
    let marker = if is_selected { "(•)" } else { "( )" };
    let pointer = if view.highlighted_choice == index { ">" } else { " " };

    let colour = match (is_selected, view.answer_state) {
        (true, AnswerState::Correct) => Color::Green,
        (true, AnswerState::Incorrect) => Color::Red,
        _ => OFF_WHITE,
    };
    let mut style = Style::default().fg(colour);
    if view.highlighted_choice == index {
        style = style.add_modifier(Modifier::BOLD);
    }

    let text = question.choice_text(index).unwrap_or_default();
    ListItem::new(format!("{} {} {}. {}", pointer, marker, index + 1, text)).style(style)
}

/// Modal drawn over the quiz screen; reports how far the session got.
pub fn draw_quit_confirmation(f: &mut Frame, view: &QuizView, total_questions: usize) {
    let area = centered_rect(f.area(), 48, 7);
    f.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(format!(
            "Answered {} so far, at question {}/{}.",
            view.questions_answered, view.question_index, total_questions
        )),
        Line::from("Answers are not kept after you leave."),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", key_style),
            Span::from(" Leave  "),
            Span::styled("n", key_style),
            Span::from(" Keep playing"),
        ]),
    ];

    let dialog = Paragraph::new(text)
        .style(Style::default().fg(OFF_WHITE).bg(OFF_DARK_PURPLE))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(LIGHT_PURPLE))
                .title("Leave the quiz?"),
        );
    f.render_widget(dialog, area);
}
