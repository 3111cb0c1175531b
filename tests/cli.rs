use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .output()
        .expect("Failed to launch the binary")
}

#[test]
fn deck_sort_rejects_a_bad_count() {
    let output = run(env!("CARGO_BIN_EXE_deck_sort"), &["--seed", "1", "many"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Fatal error:"), "{}", stderr);
}

#[test]
fn deck_sort_reports_its_rounds() {
    let output = run(env!("CARGO_BIN_EXE_deck_sort"), &["--seed", "1", "5"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 of 5 rounds failed."), "{}", stdout);
}

#[test]
fn tree_fill_falls_back_to_the_default_size() {
    let output = run(env!("CARGO_BIN_EXE_tree_fill"), &["--seed", "1", "lots"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("will be 2048"), "{}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("from 0 to 2048"), "{}", stdout);
    assert!(stdout.contains("successfully emptied"), "{}", stdout);
}
