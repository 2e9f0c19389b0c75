use std::process::Command;

#[test]
fn demo_binary_prints_all_three_listings_to_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_libcatalog"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run demo binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Books in Library:",
            "Fiction Book: The real one by F. Bomb",
            "Non-Fiction Book: Not Again, Wake up. by Yikes Mink",
            "Library Members:",
            "Library Member: Jordan, ID: M-001",
            "Library Staff:",
            "Library Staff: Stew, ID: S-001",
        ]
    );
    assert!(stdout.ends_with('\n'));
}
