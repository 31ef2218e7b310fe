use assert_cmd::Command;

pub fn flatwiki_cmd() -> Command {
    let mut cmd = Command::cargo_bin("flatwiki").unwrap();
    cmd.env_remove("FLATWIKI_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
