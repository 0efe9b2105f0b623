mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::contains;

    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "refscan";

    /// The binary scans the directory it lives in, so every test stages a
    /// copy of it inside a fixture tree and runs that copy.
    fn stage_binary(root: &Path) -> std::io::Result<PathBuf> {
        let built = assert_cmd::cargo::cargo_bin(NAME);
        let staged = root.join(NAME);
        fs::copy(built, &staged)?;
        Ok(staged)
    }

    const PREAMBLE: &str = "🔍 Searching for misleading 'claude.ai/' references...\n    \
                            (Should be 'claude.ai/code/' for Claude Code Web UI)\n\n";

    #[test]
    fn test_output__when_tree_is_empty() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let staged = stage_binary(temp_dir.path())?;

        let mut cmd = Command::new(staged);

        cmd.assert().success().stdout(format!(
            "{PREAMBLE}✅ No misleading 'claude.ai/' references found!\n"
        ));
        Ok(())
    }

    #[test]
    fn test_output__when_single_match() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("docs"))?;
        fs::write(
            base.join("docs/a.md"),
            "one\ntwo\nSee https://claude.ai/start\n",
        )?;
        let staged = stage_binary(base)?;

        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("❌ Found 1 file(s) with misleading references:"))
            .stdout(contains("📄 docs/a.md"))
            .stdout(contains("   Line    3: See https://claude.ai/start"))
            .stdout(contains("📊 Summary: 1 match(es) in 1 file(s)"))
            .stdout(contains(
                "Replace 'https://claude.ai/' with 'https://claude.ai/code/'",
            ));
        Ok(())
    }

    #[test]
    fn test_output__code_subpath_is_not_flagged() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(
            base.join("notes.md"),
            "fine https://claude.ai/code/foo\nbad claude.ai/bar\n",
        )?;
        let staged = stage_binary(base)?;

        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("   Line    2: bad claude.ai/bar"))
            .stdout(contains("📊 Summary: 1 match(es) in 1 file(s)"));
        Ok(())
    }

    #[test]
    fn test_output__skip_set_directory_is_pruned() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("node_modules/pkg"))?;
        fs::write(
            base.join("node_modules/pkg/readme.md"),
            "https://claude.ai/violating\n",
        )?;
        let staged = stage_binary(base)?;

        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("✅ No misleading 'claude.ai/' references found!"));
        Ok(())
    }

    #[test]
    fn test_output__non_allow_listed_files_are_ignored() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("main.rs"), "// https://claude.ai/in-code\n")?;
        fs::write(base.join("image.png"), "claude.ai/in-binary-ish-name\n")?;
        let staged = stage_binary(base)?;

        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("✅ No misleading 'claude.ai/' references found!"));
        Ok(())
    }

    #[test]
    fn test_output__bare_names_are_scanned() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("LICENSE"), "see claude.ai/legal\n")?;
        fs::write(base.join("README"), "see claude.ai/start\n")?;
        let staged = stage_binary(base)?;

        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("📄 LICENSE"))
            .stdout(contains("📄 README"))
            .stdout(contains("📊 Summary: 2 match(es) in 2 file(s)"));
        Ok(())
    }

    #[test]
    fn test_output__files_listed_in_sorted_order() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("zebra.md"), "claude.ai/z\n")?;
        fs::write(base.join("alpha.md"), "claude.ai/a\n")?;
        let staged = stage_binary(base)?;

        let output = Command::new(staged).output()?;
        let stdout = String::from_utf8(output.stdout)?;

        let pos_alpha = stdout.find("📄 alpha.md").unwrap();
        let pos_zebra = stdout.find("📄 zebra.md").unwrap();
        assert!(pos_alpha < pos_zebra);
        Ok(())
    }

    #[test]
    fn test_output__is_byte_identical_across_runs() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("docs"))?;
        fs::write(base.join("docs/a.md"), "claude.ai/one\n")?;
        fs::write(base.join("b.txt"), "claude.ai/two\nclaude.ai/code/ok\n")?;
        let staged = stage_binary(base)?;

        let first = Command::new(&staged).output()?;
        let second = Command::new(&staged).output()?;

        assert_eq!(first.stdout, second.stdout);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_output__read_failure_warns_and_scan_continues() -> TestResult {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("good.md"), "claude.ai/reported\n")?;
        let locked = base.join("locked.md");
        fs::write(&locked, "claude.ai/hidden\n")?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Permission bits do not bind for root; nothing to verify then.
        if fs::read(&locked).is_ok() {
            return Ok(());
        }

        let staged = stage_binary(base)?;
        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("⚠️  Error reading"))
            .stdout(contains("locked.md"))
            .stdout(contains("📄 good.md"))
            .stdout(contains("   Line    1: claude.ai/reported"))
            .stdout(contains("📊 Summary: 1 match(es) in 1 file(s)"));
        Ok(())
    }

    #[test]
    fn test_exit_code__is_zero_even_with_violations() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("bad.md"), "https://claude.ai/violating\n")?;
        let staged = stage_binary(base)?;

        let mut cmd = Command::new(staged);

        cmd.assert()
            .success()
            .stdout(contains("❌ Found 1 file(s) with misleading references:"));
        Ok(())
    }
}
