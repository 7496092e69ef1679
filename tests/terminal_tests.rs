// Host-side tests for the terminal overlay's command table and open/close
// rules.

use orb_core::{KeyAction, Terminal, TerminalConfig, HELP_TEXT, PROJECTS_TEXT};

fn open_terminal() -> Terminal {
    let mut t = Terminal::new(TerminalConfig::default());
    assert_eq!(t.on_key("t"), KeyAction::Open);
    t
}

#[test]
fn help_and_projects_have_fixed_answers() {
    let mut t = open_terminal();
    assert_eq!(t.submit("help").response.as_deref(), Some(HELP_TEXT));
    assert_eq!(t.submit("Projects").response.as_deref(), Some(PROJECTS_TEXT));
    assert!(t.is_open());
}

#[test]
fn contact_uses_configured_address() {
    let mut t = Terminal::new(TerminalConfig {
        prompt: "visitor@orb:~$".into(),
        contact: "someone@example.net".into(),
    });
    let reply = t.submit("contact");
    assert_eq!(reply.echo, "visitor@orb:~$ contact");
    assert_eq!(reply.response.as_deref(), Some("someone@example.net"));
}

#[test]
fn unknown_command_is_reported_after_normalizing() {
    let mut t = open_terminal();
    let reply = t.submit("  LS -la ");
    assert_eq!(reply.response.as_deref(), Some("Command not found: ls -la"));
    assert!(!reply.clear && !reply.close);
}

#[test]
fn empty_line_is_an_unknown_command() {
    let mut t = open_terminal();
    assert_eq!(t.submit("   ").response.as_deref(), Some("Command not found: "));
}

#[test]
fn clear_wipes_without_response() {
    let mut t = open_terminal();
    let reply = t.submit("clear");
    assert!(reply.clear);
    assert!(reply.response.is_none());
    assert!(t.is_open());
}

#[test]
fn exit_and_backdrop_close_the_overlay() {
    let mut t = open_terminal();
    assert!(t.submit("exit").close);
    assert!(!t.is_open());

    assert_eq!(t.on_key("T"), KeyAction::Open);
    assert_eq!(t.on_backdrop_click(), KeyAction::Close);
    assert_eq!(t.on_backdrop_click(), KeyAction::Ignore);
}

#[test]
fn escape_only_closes_an_open_terminal() {
    let mut t = Terminal::new(TerminalConfig::default());
    assert_eq!(t.on_key("Escape"), KeyAction::Ignore);
    assert_eq!(t.on_key("x"), KeyAction::Ignore);
    assert_eq!(t.on_key("t"), KeyAction::Open);
    assert_eq!(t.on_key("Escape"), KeyAction::Close);
}
