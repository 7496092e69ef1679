//! Easter-egg terminal: open/close rules and the command table.

use crate::config::TerminalConfig;

pub const HELP_TEXT: &str = "Available: help, contact, projects, clear, exit";
pub const PROJECTS_TEXT: &str = "Check the grid below.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    Contact,
    Projects,
    Clear,
    Exit,
    Unknown(String),
}

impl TerminalCommand {
    /// `line` is expected already normalized (see [`normalize_line`]).
    pub fn parse(line: &str) -> Self {
        match line {
            "help" => Self::Help,
            "contact" => Self::Contact,
            "projects" => Self::Projects,
            "clear" => Self::Clear,
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub fn normalize_line(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// What the page should do after a line is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalReply {
    /// The prompt line echoing the command.
    pub echo: String,
    pub response: Option<String>,
    /// Wipe the output before anything else is shown; the echo is dropped too.
    pub clear: bool,
    pub close: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Open,
    Close,
    Ignore,
}

#[derive(Clone, Debug, Default)]
pub struct Terminal {
    config: TerminalConfig,
    open: bool,
}

impl Terminal {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            config,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Global keydown: `t` opens, `Escape` closes.
    pub fn on_key(&mut self, key: &str) -> KeyAction {
        if !self.open && key.eq_ignore_ascii_case("t") {
            self.open = true;
            KeyAction::Open
        } else if self.open && key == "Escape" {
            self.open = false;
            KeyAction::Close
        } else {
            KeyAction::Ignore
        }
    }

    /// Click on the overlay backdrop (not its contents).
    pub fn on_backdrop_click(&mut self) -> KeyAction {
        if self.open {
            self.open = false;
            KeyAction::Close
        } else {
            KeyAction::Ignore
        }
    }

    pub fn submit(&mut self, raw: &str) -> TerminalReply {
        let cmd = normalize_line(raw);
        let echo = format!("{} {}", self.config.prompt, cmd);
        let mut reply = TerminalReply {
            echo,
            response: None,
            clear: false,
            close: false,
        };
        match TerminalCommand::parse(&cmd) {
            TerminalCommand::Help => reply.response = Some(HELP_TEXT.to_string()),
            TerminalCommand::Contact => reply.response = Some(self.config.contact.clone()),
            TerminalCommand::Projects => reply.response = Some(PROJECTS_TEXT.to_string()),
            TerminalCommand::Clear => reply.clear = true,
            TerminalCommand::Exit => {
                self.open = false;
                reply.close = true;
            }
            TerminalCommand::Unknown(name) => {
                reply.response = Some(format!("Command not found: {name}"))
            }
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term() -> Terminal {
        Terminal::new(TerminalConfig {
            prompt: "me@root:~$".into(),
            contact: "me@example.org".into(),
        })
    }

    #[test]
    fn parse_table() {
        assert_eq!(TerminalCommand::parse("help"), TerminalCommand::Help);
        assert_eq!(TerminalCommand::parse("exit"), TerminalCommand::Exit);
        assert_eq!(
            TerminalCommand::parse("sudo"),
            TerminalCommand::Unknown("sudo".into())
        );
    }

    #[test]
    fn keys_open_and_close() {
        let mut t = term();
        assert_eq!(t.on_key("Escape"), KeyAction::Ignore);
        assert_eq!(t.on_key("T"), KeyAction::Open);
        assert_eq!(t.on_key("t"), KeyAction::Ignore);
        assert_eq!(t.on_key("Escape"), KeyAction::Close);
        assert!(!t.is_open());
        assert_eq!(t.on_backdrop_click(), KeyAction::Ignore);
    }

    #[test]
    fn submit_normalizes_and_echoes() {
        let mut t = term();
        let r = t.submit("  CONTACT ");
        assert_eq!(r.echo, "me@root:~$ contact");
        assert_eq!(r.response.as_deref(), Some("me@example.org"));
    }

    #[test]
    fn exit_closes() {
        let mut t = term();
        t.on_key("t");
        let r = t.submit("exit");
        assert!(r.close);
        assert!(r.response.is_none());
        assert!(!t.is_open());
    }
}
