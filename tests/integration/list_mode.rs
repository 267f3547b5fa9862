use crate::common::{fixture, stdout, Sandbox};

#[test]
fn list_prints_configured_desktops() {
    let sandbox = Sandbox::new();
    let config = fixture("desktops_valid.json");

    let output = sandbox.run(&["--list", "--config", config.to_str().expect("utf-8 path")]);

    assert!(output.status.success(), "list should succeed: {output:?}");
    assert_eq!(stdout(&output), "dwm\ni3\n");
    assert!(
        !sandbox.output_path().exists(),
        "list mode must not write a session script"
    );
}

#[test]
fn list_uses_xdg_config_home_by_default() {
    let sandbox = Sandbox::new();
    sandbox.write_config(
        "xdg/sxssion/desktops.json",
        r#"{"xfce": ["exec startxfce4"], "awesome": ["exec awesome"]}"#,
    );

    let output = sandbox
        .command()
        .env("XDG_CONFIG_HOME", sandbox.temp.path().join("xdg"))
        .arg("-l")
        .output()
        .expect("sxssion should start");

    assert!(output.status.success(), "list should succeed: {output:?}");
    assert_eq!(stdout(&output), "awesome\nxfce\n");
}

#[test]
fn list_falls_back_to_home_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("home/.config/sxssion/desktops.json", r#"{"dwm": []}"#);

    let output = sandbox
        .command()
        .env_remove("XDG_CONFIG_HOME")
        .env("HOME", sandbox.temp.path().join("home"))
        .arg("-l")
        .output()
        .expect("sxssion should start");

    assert!(output.status.success(), "list should succeed: {output:?}");
    assert_eq!(stdout(&output), "dwm\n");
}
