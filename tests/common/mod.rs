use assert_cmd::Command;

pub fn sinaxar_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sinaxar").unwrap();
    cmd.env_remove("SINAXAR_CONFIG");
    cmd.env_remove("XDG_CONFIG_HOME");
    cmd.env_remove("HOME");
    cmd
}
