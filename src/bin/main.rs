use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use mentor_core::config::MentorConfig;
use mentor_core::core::content::{disclaimer, input_placeholder, language_label};
use mentor_core::core::types::{is_supported_language, Role, SUPPORTED_LANGUAGES};
use mentor_core::logging::init_tracing;
use mentor_core::{Conversation, MentorEngine};
use std::io::{self, stdin, stdout, Write};
use std::thread;
use std::time::Duration;

/// One line typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Exit,
    Reset,
    Language(&'a str),
    QuickQuestion(usize),
    Message(&'a str),
}

// Lines that start with ':' but are not a known command are sent as
// messages, so ":) how do I budget" still reaches the mentor.
fn parse_command(line: &str) -> ChatCommand<'_> {
    let line = line.trim();
    match line {
        "exit" => ChatCommand::Exit,
        ":reset" => ChatCommand::Reset,
        ":lang" => ChatCommand::Language(""),
        s => {
            if let Some(code) = s.strip_prefix(":lang ") {
                return ChatCommand::Language(code.trim());
            }
            match s.strip_prefix(':').map(str::parse::<usize>) {
                Some(Ok(n)) => ChatCommand::QuickQuestion(n),
                _ => ChatCommand::Message(s),
            }
        }
    }
}

fn main() -> io::Result<()> {
    init_tracing("warn");
    let config = MentorConfig::from_env();
    let engine = match &config.rules_path {
        Some(path) => MentorEngine::from_file_or_builtin(path),
        None => MentorEngine::new(),
    };
    let mut language = config.language.clone();
    let mut chat = Conversation::with_greeting(&engine);
    let mut notice: Option<String> = None;

    loop {
        print_ui(&chat, &engine, &language, notice.take())?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        match parse_command(&input) {
            ChatCommand::Exit => break,
            ChatCommand::Reset => chat = Conversation::with_greeting(&engine),
            ChatCommand::Language(code) if is_supported_language(code) => {
                language = code.to_string();
            }
            ChatCommand::Language(code) => {
                notice = Some(format!(
                    "Unsupported language '{}'. Choose one of: {}",
                    code,
                    SUPPORTED_LANGUAGES.join(", ")
                ));
            }
            ChatCommand::QuickQuestion(n) => {
                let questions = engine.quick_questions(&language);
                if n > 0 && n <= questions.len() {
                    let question = questions[n - 1].to_string();
                    send(&mut chat, &engine, &question, &language, config.reply_delay)?;
                } else {
                    notice = Some(format!("No quick question :{}", n));
                }
            }
            ChatCommand::Message(text) => {
                send(&mut chat, &engine, text, &language, config.reply_delay)?
            }
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn send(
    chat: &mut Conversation,
    engine: &MentorEngine,
    input: &str,
    language: &str,
    delay: Duration,
) -> io::Result<()> {
    if input.trim().is_empty() {
        return Ok(());
    }
    print!("{}", "\nMentor is typing...".dim());
    stdout().flush()?;
    thread::sleep(delay);
    chat.submit(engine, input, language);
    Ok(())
}

fn print_ui(
    chat: &Conversation,
    engine: &MentorEngine,
    language: &str,
    notice: Option<String>,
) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    println!("{}", "AI Financial Mentor".bold());
    println!("---------------------------------------------------------------");
    let languages: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|&code| {
            let label = format!("{} ({})", language_label(code).unwrap_or(code), code);
            if code == language {
                label.reverse().to_string()
            } else {
                label
            }
        })
        .collect();
    println!("Language: {}", languages.join("  "));
    println!("Switch with ':lang <code>'. ':reset' restarts, 'exit' quits.\n");

    for turn in chat.turns() {
        match turn.role {
            Role::User => println!("{} {}", "You:".blue().bold(), turn.content),
            Role::Assistant => println!("{} {}", "Mentor:".green().bold(), turn.content),
        }
        println!();
    }

    println!("{}", "Quick questions:".bold());
    for (i, question) in engine.quick_questions(language).iter().enumerate() {
        println!("  :{}: {}", i + 1, question);
    }
    println!("\n{}", disclaimer().resolve(language).italic());
    if let Some(notice) = notice {
        println!("\n{}", notice.yellow());
    }
    print!("\n{} > ", input_placeholder().resolve(language).dim());
    out.flush()
}
