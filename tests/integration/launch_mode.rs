use std::fs;

use crate::common::{assert_failed_with, fixture, pre_anchor_lines, stdout, Sandbox};

#[cfg(unix)]
#[test]
fn launch_hands_spliced_script_to_launcher() {
    let sandbox = Sandbox::new();
    let config = sandbox.write_config("desktops.json", r#"{"dwm": ["exec dwm"]}"#);

    let output = sandbox.run(&["-c", config.to_str().expect("utf-8 path"), "dwm"]);

    assert!(output.status.success(), "cat should print the script: {output:?}");
    let expected = format!("{}exec dwm\n", pre_anchor_lines(&sandbox.template));
    assert_eq!(stdout(&output), expected);
    assert_eq!(
        fs::read_to_string(sandbox.output_path()).expect("script stays on disk"),
        expected
    );
}

#[cfg(unix)]
#[test]
fn launch_with_empty_command_list_keeps_pre_anchor_lines() {
    let sandbox = Sandbox::new();
    let config = sandbox.write_config("desktops.json", r#"{"dwm": []}"#);

    let output = sandbox.run(&["-c", config.to_str().expect("utf-8 path"), "dwm"]);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        fs::read_to_string(sandbox.output_path()).expect("script stays on disk"),
        pre_anchor_lines(&sandbox.template)
    );
}

#[cfg(unix)]
#[test]
fn launch_preserves_command_order() {
    let sandbox = Sandbox::new();
    let config = fixture("desktops_valid.json");

    let output = sandbox.run(&["-c", config.to_str().expect("utf-8 path"), "i3"]);

    assert!(output.status.success(), "{output:?}");
    assert!(
        stdout(&output).ends_with("xsetroot -solid \"#222222\"\nexec i3\n"),
        "stdout: {}",
        stdout(&output)
    );
}

#[test]
fn unknown_desktop_leaves_no_script() {
    let sandbox = Sandbox::new();
    let config = sandbox.write_config("desktops.json", r#"{"dwm": ["exec dwm"]}"#);

    let output = sandbox.run(&["-c", config.to_str().expect("utf-8 path"), "i3"]);

    assert_failed_with(&output, "Desktop 'i3' isn't in the config file.");
    assert!(!sandbox.output_path().exists());
}

#[test]
fn template_without_anchor_fails() {
    let mut sandbox = Sandbox::new();
    sandbox.template = fixture("xinitrc_without_anchor");
    let config = sandbox.write_config("desktops.json", r#"{"dwm": ["exec dwm"]}"#);

    let output = sandbox.run(&["-c", config.to_str().expect("utf-8 path"), "dwm"]);

    assert_failed_with(&output, "Failed to find line '$twm &'");
}

#[test]
fn missing_launcher_is_fatal() {
    let mut sandbox = Sandbox::new();
    sandbox.startx = sandbox.temp.path().join("no-such-startx");
    let config = sandbox.write_config("desktops.json", r#"{"dwm": ["exec dwm"]}"#);

    let output = sandbox.run(&["-c", config.to_str().expect("utf-8 path"), "dwm"]);

    assert_failed_with(&output, "Failed to start");
    assert!(sandbox.output_path().exists(), "script is written before handoff");
}
