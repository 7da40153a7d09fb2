use mentor_core::config::MentorConfig;
use mentor_core::logging::init_tracing;
use mentor_core::MentorEngine;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

// Line protocol for embedding the mentor in another process.
//
//   SELECT <lang> <text>  -> RESPONSE <text>
//   GREETING <lang>       -> RESPONSE <text>
//   QUICK <lang>          -> RESPONSE <json array>
//   EXIT
//
// Backslashes, CR and LF in text replies are escaped as \\, \r and \n.
// Logs go to stderr; stdout carries only protocol lines.
fn main() -> io::Result<()> {
    init_tracing("info");
    info!("mentor pipe starting");

    let config = MentorConfig::from_env();
    let engine = match &config.rules_path {
        Some(path) => MentorEngine::from_file_or_builtin(path),
        None => MentorEngine::new(),
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        debug!(line = %input, "<-");
        if input.trim() == "EXIT" {
            info!("received EXIT");
            break;
        }
        let reply = handle_line(&engine, &input, &config.language);
        debug!(line = %reply, "->");
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }

    info!("mentor pipe shutting down");
    Ok(())
}

fn handle_line(engine: &MentorEngine, input: &str, default_language: &str) -> String {
    let (command, rest) = next_token(input);
    let (language, text) = next_token(rest);
    let language = if language.is_empty() { default_language } else { language };

    match command {
        "SELECT" => format!("RESPONSE {}", escape_line(engine.select_response(text, language))),
        "GREETING" => format!("RESPONSE {}", escape_line(engine.greeting(language))),
        "QUICK" => {
            // serde_json never emits raw line breaks.
            let json = serde_json::to_string(&engine.quick_questions(language))
                .unwrap_or_else(|_| "[]".to_string());
            format!("RESPONSE {}", json)
        }
        _ => {
            warn!(command, "unknown command");
            "ERROR unknown command".to_string()
        }
    }
}

/// Splits off the first whitespace-delimited token; the remainder has its
/// leading whitespace removed.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

// Rule packs may carry line breaks; one reply must stay one line.
fn escape_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
