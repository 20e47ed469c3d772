//! Line-oriented front end: reads questions and slash commands, renders
//! answers and notices.

use std::io::{self, Write};

use causerie_ai::ConversationSession;
use causerie_common::Notification;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

const HELP: &str = "\
Type a question and press Enter. Commands:
  /roles            list personas
  /role N           use persona N (before the first question)
  /role-text TEXT   use a custom system role
  /debug            toggle debug mode
  /payloads         show the last raw request and response
  /history          show the conversation
  /new              start a new chat
  /help             show this help
  /quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    Roles,
    Role(usize),
    RoleText(String),
    Debug,
    Payloads,
    History,
    New,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "roles" => Command::Roles,
        "role" => match arg.parse() {
            Ok(index) => Command::Role(index),
            Err(_) => Command::Invalid(format!("/role expects a number, got '{arg}'")),
        },
        "role-text" if !arg.is_empty() => Command::RoleText(arg.to_string()),
        "role-text" => Command::Invalid("/role-text expects the role text".into()),
        "debug" => Command::Debug,
        "payloads" => Command::Payloads,
        "history" => Command::History,
        "new" => Command::New,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command '/{other}'")),
    }
}

fn role_locked_notice() -> Notification {
    Notification::warning(
        "Role locked",
        "The persona is fixed for this chat. Use /new to start over.",
    )
}

/// Drive `session` from `input` until EOF or `/quit`, writing to `out`.
///
/// Returns the session so the caller owns its final state.
pub async fn run<R, W>(
    mut session: ConversationSession,
    input: R,
    out: &mut W,
) -> io::Result<ConversationSession>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            Command::Ask(question) => {
                let result = session
                    .submit_question(&question)
                    .await
                    .map(str::to_owned);
                match result {
                    Ok(answer) => {
                        session.lock_role();
                        writeln!(out, "{answer}")?;
                    }
                    Err(e) => writeln!(out, "{}", e.to_notification())?,
                }
            }
            Command::Roles => {
                for (i, persona) in session.available_roles().iter().enumerate() {
                    let marker = if persona.instructions == session.system_role() {
                        "*"
                    } else {
                        " "
                    };
                    writeln!(out, "{marker} {i}: {}", persona.label)?;
                }
            }
            Command::Role(index) => {
                if session.role_locked() {
                    writeln!(out, "{}", role_locked_notice())?;
                    continue;
                }
                let notice = match session.select_role(index) {
                    Some(persona) => Notification::info("Role selected", persona.label.clone()),
                    None => Notification::warning("Unknown role", format!("no persona {index}")),
                };
                writeln!(out, "{notice}")?;
            }
            Command::RoleText(text) => {
                if session.role_locked() {
                    writeln!(out, "{}", role_locked_notice())?;
                    continue;
                }
                session.set_system_role(text);
                writeln!(out, "{}", Notification::info("Custom role set", ""))?;
            }
            Command::Debug => {
                session.toggle_debug();
                let state = if session.debug_enabled() { "on" } else { "off" };
                writeln!(out, "{}", Notification::info("Debug mode", state))?;
            }
            Command::Payloads => {
                let request = session.last_request_payload();
                let response = session.last_response_payload();
                if request.is_empty() && response.is_empty() {
                    writeln!(out, "(no exchange yet)")?;
                } else {
                    writeln!(out, "--- request ---\n{request}")?;
                    writeln!(out, "--- response ---\n{response}")?;
                }
            }
            Command::History => write!(out, "{}", session.render_transcript())?,
            Command::New => {
                session = session.start_new_chat();
                writeln!(out, "{}", Notification::info("New chat started", ""))?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {
                info!("quit requested");
                break;
            }
            Command::Invalid(reason) => {
                writeln!(out, "{}", Notification::warning("Invalid command", reason))?;
            }
        }
    }

    Ok(session)
}
