//! Assertion macros with descriptive failure output.

/// Assert that stdout or stderr contains a substring.
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.combined_output().contains($needle),
            "Expected output to contain {:?}.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that neither stdout nor stderr contains a substring.
macro_rules! assert_output_not_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            !$result.combined_output().contains($needle),
            "Expected output NOT to contain {:?}.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the process exit code.
macro_rules! assert_exit {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "Unexpected exit code.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
