#[cfg(test)]
mod cli_tests {
    use std::ffi::OsString;
    use std::process::{Command, Output};

    fn run<I, S>(args: I) -> Output
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Command::new(env!("CARGO_BIN_EXE_randreg"))
            .args(args.into_iter().map(Into::into))
            .output()
            .expect("failed to launch randreg")
    }

    fn connection_count(stdout: &[u8]) -> usize {
        String::from_utf8_lossy(stdout)
            .lines()
            .filter(|l| l.contains("<-->"))
            .count()
    }

    #[test]
    fn test_impossible_degree_is_usage_error() {
        for args in [["5", "5"], ["5", "1"]] {
            let output = run(args);
            assert_eq!(output.status.code(), Some(2), "randreg {:?}", args);
            assert!(output.stdout.is_empty(), "randreg {:?} wrote to stdout", args);

            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains("error"), "no usage message: {}", stderr);
            assert!(stderr.contains("Usage"), "no usage message: {}", stderr);
        }
    }

    #[test]
    fn test_malformed_arguments_are_usage_errors() {
        for args in [vec!["10"], vec!["ten", "3"], vec!["4", "2", "-m", "FullNode"], vec!["4", "2", "-d", "-1"]] {
            let output = run(args.iter().copied());
            assert_eq!(output.status.code(), Some(2), "randreg {:?}", args);
            assert_eq!(connection_count(&output.stdout), 0);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_usage_error() {
        use std::os::unix::ffi::OsStringExt;

        let output = run([
            OsString::from("4"),
            OsString::from("2"),
            OsString::from("--name"),
            OsString::from_vec(vec![0xff]),
        ]);
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_four_nodes_degree_three() {
        let output = run(["4", "3", "-d", "10", "--name", "Net", "--seed", "1"]);
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("// Generated with the following command:\n// "));
        assert!(stdout.contains(" 4 3 -d 10 --name Net --seed 1\n\nnetwork Net\n{\n"));
        assert!(stdout.contains("        node[4]: HBNode;\n"));
        assert!(stdout.ends_with("}\n"));

        let lines: Vec<&str> = stdout.lines().filter(|l| l.contains("<-->")).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.contains("{  delay = 10ms; }") && l.contains(".peer++")));
    }

    #[test]
    fn test_no_header() {
        let output = run(["6", "2", "--no-header", "-e", "link", "-s", "3"]);
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("network RandReg\n"));
        assert_eq!(stdout.matches(".link++").count(), 2 * 6);
    }

    #[test]
    fn test_dense_degree() {
        let output = run(["60", "58", "-s", "1", "--no-header"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(connection_count(&output.stdout), 60 * 58 / 2);
    }

    #[test]
    fn test_same_seed_same_output() {
        let first = run(["30", "4", "-s", "9", "--no-header"]);
        let second = run(["30", "4", "-s", "9", "--no-header"]);
        assert_eq!(first.status.code(), Some(0));
        assert_eq!(first.stdout, second.stdout);
    }
}
