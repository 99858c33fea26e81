use coach_core::backend::OllamaBackend;
use coach_core::config::CoachConfig;
use coach_core::session::{Role, Session};
use std::io::{BufRead, Write};
use std::path::Path;

/// Interactive chat session: one scrollable log, one input line.
///
/// Free text drives the case through description → intake answers →
/// report; typed reset phrases ("new case", ...) work at any point.
/// Slash controls mirror the two buttons of the original UI:
/// `/new` starts a new case keeping the log, `/clear` discards the log.
pub fn run(config_dir: &Path) -> anyhow::Result<()> {
    let config = CoachConfig::load(config_dir)?;
    let backend = OllamaBackend::from_env();
    let mut session = Session::new();

    println!("Responsible AI Coach — /new starts a new case, /clear clears the chat, /quit exits.\n");
    print_from(&session, 0);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        write!(stdout, "you> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/new" => {
                let seen = session.messages.len();
                session.reset(true);
                print_from(&session, seen);
            }
            "/clear" => {
                session.reset(false);
                print_from(&session, 0);
            }
            _ => {
                let seen = session.messages.len();
                session.handle_input(input, &config, &backend);
                print_from(&session, seen);
            }
        }
    }

    Ok(())
}

/// Print assistant messages appended since `from`.
fn print_from(session: &Session, from: usize) {
    for msg in &session.messages[from..] {
        if msg.role == Role::Assistant {
            println!("coach> {}\n", msg.content);
        }
    }
}
