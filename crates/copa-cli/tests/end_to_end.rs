//! Drive the CLI body over a real CoNLL-U file.

use clap::Parser;
use copa_cli::{run, Args};
use std::io::Write;

const DOCUMENT: &str = "# sent_id = s1\n# text = O menino comeu a maçã.\n\
1\tO\to\tDET\t_\t_\t2\tdet\t_\t_\n\
2\tmenino\tmenino\tNOUN\t_\t_\t3\tnsubj\t_\t_\n\
3\tcomeu\tcomer\tVERB\t_\t_\t0\troot\t_\t_\n\
4\ta\to\tDET\t_\t_\t5\tdet\t_\t_\n\
5\tmaçã\tmaçã\tNOUN\t_\t_\t3\tobj\t_\t_\n\
6\t.\t.\tPUNCT\t_\t_\t3\tpunct\t_\t_\n";

#[test]
fn extracts_a_document_to_text() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "{DOCUMENT}").unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let args = Args::parse_from([
        "copa",
        input.path().to_str().unwrap(),
        "--all",
        "-o",
        output.path().to_str().unwrap(),
    ]);
    run(&args).unwrap();

    let rendered = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(
        rendered,
        "O menino comeu a maçã.\n  (O menino; comeu; a maçã)\n"
    );
}

#[test]
fn malformed_blocks_are_skipped_not_fatal() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(
        input,
        "# sent_id = bad\n1\ta\ta\tNOUN\t_\t_\tx\tdep\t_\t_\n\n{DOCUMENT}"
    )
    .unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let args = Args::parse_from([
        "copa",
        input.path().to_str().unwrap(),
        "--format",
        "tabular",
        "-o",
        output.path().to_str().unwrap(),
    ]);
    run(&args).unwrap();

    let rendered = std::fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "id\tsentence\targ1\trel\targ2");
    assert_eq!(
        lines[1],
        "1\tO menino comeu a maçã.\tO menino\tcomeu\ta maçã"
    );
}
