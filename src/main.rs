use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use trivia_quiz::{
    draw_questions, draw_quit_confirmation, handle_quiz_input, logger, AppState, Config,
    HttpQuestionApi, QuestionRepository, QuestionsViewModel, QuizView,
};

const LOG_TAG: &str = "MAIN";

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::default();
    logger::init(&config.log_file);
    logger::log(LOG_TAG, &format!("Starting, question feed {}", config.questions_url()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(LOG_TAG, &format!("Exited with error: {}", e));
    }
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> io::Result<()> {
    let view_model =
        QuestionsViewModel::new(QuestionRepository::new(HttpQuestionApi::new(config)));
    let mut data = view_model.data();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick_rate);

    let mut view = QuizView::new();
    let mut app_state = AppState::Quiz;
    let mut tick: usize = 0;
    let mut was_loading = true;
    let mut fetch_closed = false;

    logger::log(LOG_TAG, "Loading questions...");

    loop {
        let total_questions = view_model.total_question_count();
        {
            let state = data.borrow();
            if was_loading && !state.loading {
                was_loading = false;
                logger::log(LOG_TAG, "Loading done...");
                logger::log(LOG_TAG, &format!("Questions: {}", total_questions));
            }

            terminal.draw(|f| {
                draw_questions(f, &state, &view, total_questions, tick);
                if app_state == AppState::QuizQuitConfirm {
                    draw_quit_confirmation(f, &view, total_questions);
                }
            })?;
        }

        let key = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => Some(key),
                Some(Ok(_)) => None,
                Some(Err(e)) => return Err(e),
                None => break,
            },
            _ = ticker.tick() => {
                tick = tick.wrapping_add(1);
                None
            }
            changed = data.changed(), if !fetch_closed => {
                // The sender goes away once the fetch task is done.
                if changed.is_err() {
                    fetch_closed = true;
                }
                None
            }
        };

        if let Some(key) = key {
            let state = data.borrow();
            let questions = if state.loading {
                None
            } else {
                state.data.as_deref()
            };
            handle_quiz_input(&mut view, key, &mut app_state, questions)?;
        }

        if app_state == AppState::Exit {
            logger::log(
                LOG_TAG,
                &format!(
                    "Exiting at question {} with {} answered",
                    view.question_index, view.questions_answered
                ),
            );
            break;
        }
    }

    Ok(())
}
