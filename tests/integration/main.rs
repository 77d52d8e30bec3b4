//! Integration tests for hostrun

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn hostrun() -> Command {
        let mut cmd = cargo_bin_cmd!("hostrun");
        cmd.arg("--no-local").env_remove("HOSTRUN_CONFIG");
        cmd
    }

    #[test]
    fn help_displays() {
        hostrun()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("run the active file"));
    }

    #[test]
    fn version_displays() {
        hostrun()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("hostrun"));
    }

    #[test]
    fn match_prefers_shared_stem() {
        hostrun()
            .args([
                "match",
                "/p/src/foo.ts",
                "/p/out/bar.js",
                "/p/out/foo.js",
                "--format",
                "plain",
            ])
            .assert()
            .success()
            .stdout("/p/out/foo.js\n");
    }

    #[test]
    fn match_tie_keeps_input_order() {
        hostrun()
            .args(["match", "/a/z.ts", "/x/q.js", "/y/q.js", "-f", "plain"])
            .assert()
            .success()
            .stdout("/x/q.js\n");
    }

    #[test]
    fn match_json_lists_scores() {
        hostrun()
            .args(["match", "/p/src/foo.ts", "/p/out/foo.js", "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"score\": 4"));
    }

    #[test]
    fn config_path_uses_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");

        hostrun()
            .args(["config", "path", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_show_prints_sections() {
        let temp = TempDir::new().unwrap();

        hostrun()
            .arg("--config")
            .arg(temp.path().join("missing.toml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[compiler]"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        hostrun()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("tsconfig.json"));
    }

    #[test]
    fn check_direct_script_without_project() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[project]\nconfig_file = \"hostrun-it-tsconfig.json\"\n").unwrap();
        let script = temp.path().join("tool.jsx");

        hostrun()
            .arg("--config")
            .arg(&config)
            .arg("check")
            .arg(&script)
            .args(["-f", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("direct "));
    }

    #[test]
    fn run_missing_compiler_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[compiler]\nprogram = \"hostrun-no-such-tsc\"\n").unwrap();
        std::fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

        hostrun()
            .arg("--config")
            .arg(&config)
            .arg("run")
            .arg(temp.path().join("main.ts"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unavailable"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn serve_answers_ping() {
        let temp = TempDir::new().unwrap();

        hostrun()
            .arg("--config")
            .arg(temp.path().join("missing.toml"))
            .arg("serve")
            .write_stdin("{\"command\":\"ping\"}\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"status\":\"pong\""));
    }
}
