//! Interactive questionnaire.
//!
//! The session is saved after every change so an interrupted quiz resumes
//! where it stopped. Snapshots from another version are discarded.

use crate::cli::QuizArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::messages::Messages;
use crate::output::Formatter;
use crate::report;
use nakshatra_catalog::Catalog;
use nakshatra_domain::traits::MessageCatalog;
use nakshatra_domain::{Likert, Question, QuizSession};
use nakshatra_share::SessionSnapshot;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// One line of quiz input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// A Likert response 1-5
    Answer(i64),
    /// Next question
    Next,
    /// Previous question
    Back,
    /// Jump to a 1-based question number
    Goto(usize),
    /// Clear every response
    Reset,
    /// Show the key bindings
    Help,
    /// Save and leave
    Quit,
}

/// What the loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the current question again
    Continue,
    /// Every question is answered; show results
    Finished,
    /// Leave without results
    Quit,
}

/// Parse one line of quiz input.
pub fn parse_quiz_input(line: &str) -> Result<QuizInput> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [n] if n.chars().all(|c| c.is_ascii_digit()) => n
            .parse()
            .map(QuizInput::Answer)
            .map_err(|_| CliError::InvalidInput(format!("Not a response: {}", n))),
        ["n" | "next"] => Ok(QuizInput::Next),
        ["b" | "back" | "p" | "prev"] => Ok(QuizInput::Back),
        ["g" | "goto", n] => n
            .parse()
            .map(QuizInput::Goto)
            .map_err(|_| CliError::InvalidInput(format!("Not a question number: {}", n))),
        ["reset"] => Ok(QuizInput::Reset),
        ["help" | "?"] => Ok(QuizInput::Help),
        ["q" | "quit" | "exit"] => Ok(QuizInput::Quit),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown input: {}. Type 'help' for options.",
            line
        ))),
    }
}

/// Apply an input to the session.
///
/// Answering moves to the next question; answering the last unanswered
/// question finishes the quiz.
pub fn apply(session: &mut QuizSession<'_>, input: QuizInput) -> Result<Step> {
    match input {
        QuizInput::Answer(value) => {
            session.answer_current(value)?;
            if session.is_complete() {
                return Ok(Step::Finished);
            }
            if !session.next() {
                // Last question answered but earlier ones are still open
                let open = first_unanswered(session).unwrap_or(0);
                session.go_to(open)?;
            }
        }
        QuizInput::Next => {
            if !session.can_proceed() {
                return Err(CliError::InvalidInput("Answer this question first".to_string()));
            }
            session.next();
        }
        QuizInput::Back => {
            session.previous();
        }
        QuizInput::Goto(number) => {
            session.go_to(number.saturating_sub(1))?;
        }
        QuizInput::Reset => session.reset(),
        QuizInput::Help => {}
        QuizInput::Quit => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}

fn first_unanswered(session: &QuizSession<'_>) -> Option<usize> {
    session
        .questions()
        .iter()
        .position(|q| session.response_for(&q.id).is_none())
}

/// Write the session snapshot.
pub fn save_session(path: &Path, session: &QuizSession<'_>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SessionSnapshot::capture(session).to_json()?)?;
    debug!(path = %path.display(), "saved quiz session");
    Ok(())
}

/// Load a saved session; unusable snapshots are removed and ignored.
pub fn load_session<'c>(path: &Path, questions: &'c [Question]) -> Result<Option<QuizSession<'c>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let restored = SessionSnapshot::from_json(&contents).and_then(|s| s.restore(questions));
    match restored {
        Ok(session) => {
            info!(path = %path.display(), answered = session.responses().len(), "resumed quiz session");
            Ok(Some(session))
        }
        Err(e) => {
            if e.is_legacy() {
                info!(path = %path.display(), "discarding snapshot from another version");
            } else {
                warn!(path = %path.display(), error = %e, "discarding unreadable snapshot");
            }
            fs::remove_file(path)?;
            Ok(None)
        }
    }
}

/// Execute the quiz command.
pub fn execute_quiz(
    args: QuizArgs,
    config: &Config,
    catalog: &Catalog,
    messages: &Messages,
    formatter: &Formatter,
) -> Result<()> {
    let path = config.session_path()?;
    let questions = catalog.questions();

    let mut session = if args.fresh {
        QuizSession::new(questions)
    } else {
        match load_session(&path, questions)? {
            Some(session) => {
                let progress = session.progress();
                println!(
                    "{}",
                    formatter.info(&format!(
                        "Resuming saved quiz ({}/{} answered). Use --fresh to start over.",
                        progress.answered, progress.total
                    ))
                );
                session
            }
            None => QuizSession::new(questions),
        }
    };

    if let Some(position) = session.result() {
        print_results(&position, catalog, messages, formatter)?;
        return Ok(());
    }

    let mut editor = DefaultEditor::new().map_err(editor_error)?;

    println!("{}", formatter.info("Answer 1-5, 'b' to go back, 'help' for more, 'q' to quit"));

    loop {
        let Some(question) = session.current_question() else {
            return Err(CliError::Config("The question catalog is empty".to_string()));
        };
        print_question(&session, question, messages);

        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let step = parse_quiz_input(line).and_then(|input| {
                    if input == QuizInput::Help {
                        print_help();
                    }
                    apply(&mut session, input)
                });

                match step {
                    Ok(Step::Continue) => save_session(&path, &session)?,
                    Ok(Step::Finished) => {
                        let position = session.calculate()?;
                        save_session(&path, &session)?;
                        print_results(&position, catalog, messages, formatter)?;
                        break;
                    }
                    Ok(Step::Quit) => {
                        save_session(&path, &session)?;
                        println!("{}", formatter.success("Progress saved."));
                        break;
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'q' to save and quit"));
            }
            Err(ReadlineError::Eof) => {
                save_session(&path, &session)?;
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    Ok(())
}

fn editor_error(err: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", err)))
}

fn print_question(session: &QuizSession<'_>, question: &Question, messages: &Messages) {
    let progress = session.progress();
    println!();
    println!(
        "[{}/{}] {}",
        progress.current,
        progress.total,
        messages.resolve(&format!("axes.{}.name", question.axis.as_str()))
    );
    println!("{}", question.text.as_deref().unwrap_or(question.id.as_str()));

    let current = session.response_for(&question.id);
    let scale: Vec<String> = Likert::ALL
        .iter()
        .map(|likert| {
            let marker = if Some(*likert) == current { "*" } else { " " };
            format!("{}{} {}", marker, likert.value(), messages.resolve(&likert.key()))
        })
        .collect();
    println!("  {}", scale.join("  "));
}

fn print_results(
    position: &nakshatra_domain::Position,
    catalog: &Catalog,
    messages: &Messages,
    formatter: &Formatter,
) -> Result<()> {
    let explanation = report::explain(position, catalog, messages)?;
    println!();
    println!("{}", formatter.format_explanation(&explanation)?);
    Ok(())
}

fn print_help() {
    println!("  1-5         answer the current question");
    println!("  n, next     next question (once answered)");
    println!("  b, back     previous question");
    println!("  g <n>       jump to question n");
    println!("  reset       clear every answer");
    println!("  q, quit     save and quit");
}
