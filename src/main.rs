mod account;
mod quiz;

use std::io::{self, BufRead, Write};

use account::AccountDirectory;
use quiz::{Question, QuizCatalog, QuizId, QuizResult, OPTION_COUNT};

const GREETING_TEXT: &str = "Welcome to quizdeck! Type `help` to see what you can do.";

// Author recorded on quizzes created without a session.
const ANONYMOUS_AUTHOR: &str = "anonymous";

fn main() -> io::Result<()> {
    pretty_env_logger::init();
    log::info!("starting quizdeck shell...");

    let mut directory = AccountDirectory::new();
    let mut catalog = QuizCatalog::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{GREETING_TEXT}");
    loop {
        let Some(line) = prompt(&mut input, "> ")? else {
            break;
        };
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("help") => print_help(),
            Some("list") => list_quizzes(&catalog),
            Some("take") => match parts.next().and_then(|raw| raw.parse::<QuizId>().ok()) {
                Some(id) => take_quiz(&mut input, &mut catalog, id)?,
                None => println!("Usage: take <quiz id>"),
            },
            Some("create") => create_quiz(&mut input, &mut catalog, &directory)?,
            Some("register") => register(&mut input, &mut directory)?,
            Some("login") => login(&mut input, &mut directory)?,
            Some("logout") => {
                directory.logout();
                println!("Logged out.");
            }
            Some("whoami") => match directory.current_session() {
                Some(session) => println!("{} ({})", session.display_name, session.email),
                None => println!(
                    "Not logged in; quizzes you create are credited to {ANONYMOUS_AUTHOR:?}."
                ),
            },
            Some("results") => show_last_result(&mut catalog),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("Unknown command {other:?}; type `help`."),
        }
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list            show every quiz");
    println!("  take <id>       take a quiz question by question");
    println!("  create          author a new quiz");
    println!("  results         review and clear the last score");
    println!("  register        create an account and log in");
    println!("  login / logout  manage the session");
    println!("  whoami          show who is logged in");
    println!("  quit            leave");
}

fn list_quizzes(catalog: &QuizCatalog) {
    println!("Available quizzes:");
    for quiz in catalog.quizzes() {
        println!(
            "  {:>3}  {} ({} questions, by {})",
            quiz.id,
            quiz.title,
            quiz.questions.len(),
            quiz.created_by
        );
    }
}

fn register(input: &mut impl BufRead, directory: &mut AccountDirectory) -> io::Result<()> {
    let Some(email) = prompt(input, "Email: ")? else {
        return Ok(());
    };
    let Some(password) = prompt(input, "Password: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, "Display name: ")? else {
        return Ok(());
    };
    match directory.register(&email, &password, &name) {
        Ok(session) => println!("Welcome, {}! You are now logged in.", session.display_name),
        Err(err) => println!("Registration failed: {err}"),
    }
    Ok(())
}

fn login(input: &mut impl BufRead, directory: &mut AccountDirectory) -> io::Result<()> {
    let Some(email) = prompt(input, "Email: ")? else {
        return Ok(());
    };
    let Some(password) = prompt(input, "Password: ")? else {
        return Ok(());
    };
    match directory.login(&email, &password) {
        Ok(session) => println!("Welcome back, {}!", session.display_name),
        Err(err) => println!("Login failed: {err}"),
    }
    Ok(())
}

fn create_quiz(
    input: &mut impl BufRead,
    catalog: &mut QuizCatalog,
    directory: &AccountDirectory,
) -> io::Result<()> {
    let Some(title) = prompt(input, "Quiz title: ")? else {
        return Ok(());
    };

    let mut questions: Vec<Question> = Vec::new();
    loop {
        let number = questions.len() as u32 + 1;
        println!("-- Question {number} --");
        let Some(text) = prompt(input, "Question text: ")? else {
            break;
        };

        let mut options: [String; OPTION_COUNT] = Default::default();
        for (index, slot) in options.iter_mut().enumerate() {
            let Some(option) = prompt(input, &format!("Option {}: ", index + 1))? else {
                return Ok(());
            };
            *slot = option;
        }

        let Some(raw) = prompt(input, &format!("Correct option [1-{OPTION_COUNT}]: "))? else {
            return Ok(());
        };
        let Some(correct) = parse_option_number(&raw) else {
            println!("That is not an option number; dropping this question.");
            continue;
        };

        questions.push(Question::new(number, text, options, correct));

        let Some(more) = prompt(input, "Add another question? [y/N]: ")? else {
            break;
        };
        if !more.eq_ignore_ascii_case("y") {
            break;
        }
    }

    if questions.is_empty() {
        println!("A quiz needs at least one question; nothing was created.");
        return Ok(());
    }

    let created_by = directory
        .current_session()
        .map(|session| session.email.clone())
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

    match catalog.create_quiz(&title, questions, &created_by) {
        Ok(created) => println!("Created quiz {} ({}).", created.id, created.title),
        Err(err) => println!("Could not create the quiz: {err}"),
    }
    Ok(())
}

fn take_quiz(
    input: &mut impl BufRead,
    catalog: &mut QuizCatalog,
    quiz_id: QuizId,
) -> io::Result<()> {
    let Some(quiz) = catalog.find_quiz_by_id(quiz_id) else {
        println!("No quiz with id {quiz_id}.");
        return Ok(());
    };
    if quiz.questions.is_empty() {
        println!("That quiz has no questions.");
        return Ok(());
    }
    // Work on a copy so the catalog stays free for the submission call.
    let quiz = quiz.clone();

    println!(
        "Taking {} ({} questions). Answer with 1-{OPTION_COUNT}; `n`/`b` to move, `s` to submit, `q` to cancel.",
        quiz.title,
        quiz.questions.len()
    );

    let mut selections: Vec<Option<usize>> = vec![None; quiz.questions.len()];
    let mut current = 0usize;
    loop {
        let question = &quiz.questions[current];
        println!();
        println!(
            "Question {}/{}: {}",
            current + 1,
            quiz.questions.len(),
            question.text
        );
        for (index, option) in question.options.iter().enumerate() {
            let marker = if selections[current] == Some(index) {
                "*"
            } else {
                " "
            };
            println!("  {marker}{}. {option}", index + 1);
        }

        let Some(answer) = prompt(input, "? ")? else {
            return Ok(());
        };
        match answer.as_str() {
            "q" => return Ok(()),
            "n" => current = (current + 1).min(quiz.questions.len() - 1),
            "b" => current = current.saturating_sub(1),
            "s" => {
                if selections.iter().any(|selection| selection.is_none()) {
                    println!("Answer every question before submitting.");
                    continue;
                }
                let answers: Vec<usize> = selections.iter().copied().flatten().collect();
                match catalog.submit_quiz(quiz.id, &answers) {
                    Ok(result) => show_result(catalog, &result),
                    Err(err) => println!("Submission failed: {err}"),
                }
                return Ok(());
            }
            raw => match parse_option_number(raw) {
                Some(choice) => {
                    selections[current] = Some(choice);
                    if current + 1 < quiz.questions.len() {
                        current += 1;
                    }
                }
                None => println!("Pick 1-{OPTION_COUNT}, or n/b/s/q."),
            },
        }
    }
}

fn show_last_result(catalog: &mut QuizCatalog) {
    let Some(result) = catalog.current_result().cloned() else {
        println!("No quiz taken yet.");
        return;
    };
    show_result(catalog, &result);
    catalog.clear_result();
}

fn show_result(catalog: &QuizCatalog, result: &QuizResult) {
    let percent = if result.total_questions == 0 {
        100
    } else {
        result.correct_count * 100 / result.total_questions
    };
    println!();
    println!(
        "{}: {}/{} correct ({percent}%)",
        result.quiz_title, result.correct_count, result.total_questions
    );

    let Some(quiz) = catalog.find_quiz_by_id(result.quiz_id) else {
        return;
    };
    for (question, record) in quiz.questions.iter().zip(&result.answers) {
        let verdict = if record.is_correct { "correct" } else { "wrong" };
        let selected = record
            .selected_option
            .and_then(|index| question.options.get(index))
            .map(String::as_str)
            .unwrap_or("(no answer)");
        println!("  [{verdict}] {}", question.text);
        println!("      your answer: {selected}");
        if !record.is_correct {
            println!(
                "      correct answer: {}",
                question.options[question.correct_option]
            );
        }
    }
}

/// Reads one trimmed line; `None` means the input stream is closed.
fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Maps a 1-based option number as typed by the user to a 0-based index.
fn parse_option_number(raw: &str) -> Option<usize> {
    let number: usize = raw.parse().ok()?;
    if (1..=OPTION_COUNT).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}
