//! End-to-end behaviour of a session over a small tree.

use archsh::core::path::resolve;
use archsh::models::{FsNode, OutputUnit, Style};
use archsh::{HistoryDirection, Session, ShellConfig, VirtualFs};

fn fixture() -> VirtualFs {
    let root = FsNode::dir()
        .with_child(
            "testDir",
            FsNode::dir()
                .with_child("project1", FsNode::dir())
                .with_child("readme.md", FsNode::file("## Inside\n- item")),
        )
        .with_child("a", FsNode::dir())
        .with_child("b.txt", FsNode::file("bee"))
        .with_child("c.txt", FsNode::file("sea"))
        .with_child(".hidden", FsNode::file("shh"))
        .with_child("test.md", FsNode::file("# Title\nSome **bold** text."));
    VirtualFs::new(root).unwrap()
}

fn last_output(session: &Session) -> String {
    session
        .scrollback()
        .last()
        .map(|unit| unit.to_string())
        .unwrap_or_default()
}

#[test]
fn test_lookup_is_pure() {
    let fs = fixture();
    for path in ["~", "~/testDir", "~/testDir/readme.md", "~/b.txt"] {
        assert_eq!(fs.lookup(path), fs.lookup(path));
    }
}

#[test]
fn test_resolve_properties() {
    for cwd in ["~", "~/testDir", "~/testDir/project1"] {
        assert_eq!(resolve(".", cwd), cwd);
    }
    assert_eq!(resolve("..", "~/testDir"), "~");
    assert_eq!(resolve("..", "~"), "~");
}

#[test]
fn test_ls_hidden_and_ordering() {
    let fs = fixture();
    let mut session = Session::default();

    session.submit("ls", &fs);
    assert_eq!(last_output(&session), "a/  testDir/  b.txt  c.txt  test.md");

    session.submit("ls -a", &fs);
    assert_eq!(
        last_output(&session),
        "a/  testDir/  .hidden  b.txt  c.txt  test.md"
    );
}

#[test]
fn test_navigation_round_trip() {
    let fs = fixture();
    let mut session = Session::default();

    session.submit("cd testDir", &fs);
    session.submit("pwd", &fs);
    assert_eq!(last_output(&session), "~/testDir");

    session.submit("cd nonexistent", &fs);
    assert_eq!(session.working_directory(), "~/testDir");
    assert!(last_output(&session).contains("no such directory"));

    session.submit("cd ..", &fs);
    assert_eq!(session.working_directory(), "~");

    session.submit("cd testDir/project1", &fs);
    session.submit("cd", &fs);
    assert_eq!(session.working_directory(), "~");
}

#[test]
fn test_embedded_parent_segments_are_skipped() {
    let fs = fixture();
    let mut session = Session::default();

    // Resolves to ~/testDir/../testDir, which lookup walks as ~/testDir/testDir
    session.submit("cd testDir/../testDir", &fs);
    assert_eq!(session.working_directory(), "~");

    // ~/testDir/.. walks as ~/testDir and becomes the working directory verbatim
    session.submit("cd testDir/..", &fs);
    assert_eq!(session.working_directory(), "~/testDir/..");
    session.submit("ls", &fs);
    assert_eq!(last_output(&session), "project1/  readme.md");
}

#[test]
fn test_cat_markdown_decoration() {
    let fs = fixture();
    let mut session = Session::default();
    session.submit("cat test.md", &fs);

    let Some(OutputUnit::Result(text)) = session.scrollback().last() else {
        panic!("expected a result unit");
    };
    assert!(!text.plain_text().contains("# Title"));
    assert!(
        text.spans()
            .iter()
            .any(|s| s.text == "Title" && s.style == Style::Heading)
    );
    assert!(
        text.spans()
            .iter()
            .any(|s| s.text == "bold" && s.style == Style::Bold)
    );

    session.submit("cat testDir/readme.md", &fs);
    assert_eq!(last_output(&session), "Inside\n• item");
}

#[test]
fn test_blank_submission_changes_nothing() {
    let fs = fixture();
    let mut session = Session::with_welcome(&ShellConfig::default());
    session.submit("pwd", &fs);

    let scrollback = session.scrollback_len();
    let history = session.history_len();
    session.submit("", &fs);
    session.submit("   ", &fs);

    assert_eq!(session.scrollback_len(), scrollback);
    assert_eq!(session.history_len(), history);
}

#[test]
fn test_history_navigation() {
    let fs = fixture();
    let mut session = Session::default();
    session.submit("ls", &fs);
    session.submit("pwd", &fs);

    let mut nav = |dir| session.navigate_history(dir).unwrap_or_default();
    assert_eq!(nav(HistoryDirection::Up), "pwd");
    assert_eq!(nav(HistoryDirection::Up), "ls");
    assert_eq!(nav(HistoryDirection::Up), "ls");
    assert_eq!(nav(HistoryDirection::Down), "pwd");
    assert_eq!(nav(HistoryDirection::Down), "");
}

#[test]
fn test_clear_keeps_history() {
    let fs = fixture();
    let mut session = Session::default();
    session.submit("ls", &fs);
    session.submit("echo hi", &fs);
    session.submit("clear", &fs);

    assert_eq!(session.scrollback_len(), 0);
    assert_eq!(session.history_len(), 3);

    session.submit("pwd", &fs);
    assert_eq!(session.scrollback_len(), 2);
}

#[test]
fn test_unknown_and_error_outputs() {
    let fs = fixture();
    let mut session = Session::default();

    session.submit("rm -rf ~", &fs);
    assert_eq!(
        last_output(&session),
        "Command not found: rm. Type 'help' to see available commands."
    );

    session.submit("cat", &fs);
    assert_eq!(last_output(&session), "cat: missing file operand");

    session.submit("cat testDir", &fs);
    assert_eq!(last_output(&session), "cat: testDir: Is a directory");

    session.submit("ls b.txt", &fs);
    assert_eq!(
        last_output(&session),
        "ls: cannot access 'b.txt': No such directory"
    );
}

#[test]
fn test_echo_prompt_tracks_directory() {
    let fs = fixture();
    let config = ShellConfig {
        user: "guest".to_string(),
        hostname: "box".to_string(),
        ..ShellConfig::default()
    };
    let mut session = Session::new(&config);
    session.submit("cd testDir", &fs);
    session.submit("echo  spaced  out", &fs);

    let lines: Vec<_> = session.scrollback().map(|u| u.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "guest@box ~ $ cd testDir",
            "guest@box ~/testDir $ echo  spaced  out",
            " spaced  out",
        ]
    );
}
