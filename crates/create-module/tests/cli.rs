//! End-to-end runs of the create-module binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn create_module(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-module"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run create-module")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn creates_module_and_reports_files() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    let output = create_module(temp.path(), &["foo"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Creating module 'foo' in src/foo.\n\
         Created files:\n\
         src/foo/foo.c\n\
         src/foo/foo.h\n\
         src/foo/footest.c\n\
         src/foo/Makefile\n"
    );

    let module = temp.path().join("src/foo");
    let names: Vec<_> = snapshot(&module).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Makefile", "foo.c", "foo.h", "footest.c"]);
}

#[test]
fn second_run_fails_and_changes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    assert!(create_module(temp.path(), &["foo"]).status.success());
    let module = temp.path().join("src/foo");
    let before = snapshot(&module);

    let output = create_module(temp.path(), &["foo"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Module 'foo' already exists at 'src/foo'."));
    assert!(!stdout(&output).contains("Creating module"));

    assert_eq!(snapshot(&module), before);
}

#[test]
fn wrong_argument_count_prints_usage() {
    let temp = TempDir::new().unwrap();

    let cases: [&[&str]; 3] = [&[], &["a", "b"], &["a", "b", "c"]];
    for args in cases {
        let output = create_module(temp.path(), args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(stdout(&output).starts_with("Usage: create-module <module_name>"));
    }

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn name_with_leading_hyphen_is_created() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    let output = create_module(temp.path(), &["-foo"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Creating module '-foo' in src/-foo.\n"));
    assert!(temp.path().join("src/-foo/-footest.c").is_file());
    assert!(temp.path().join("src/-foo/-foo.h").is_file());
}

#[test]
fn invalid_name_creates_nothing() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    let output = create_module(temp.path(), &[".."]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid module name"));
    assert_eq!(fs::read_dir(temp.path().join("src")).unwrap().count(), 0);
}

#[test]
fn root_flag_selects_project() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("project");
    fs::create_dir(&root).unwrap();

    let output = create_module(temp.path(), &["vector", "--root", "project"]);
    assert!(output.status.success());
    assert!(root.join("src/vector/vectortest.c").is_file());
    assert!(stdout(&output).contains("project/src/vector/Makefile\n"));
}
