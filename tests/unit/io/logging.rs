//! Tests for log filter selection and subscriber setup

#[cfg(test)]
mod tests {
    use photomosaic::io::logging::{filter_directive, init_logging};

    // Tests each verbosity level selects its directive
    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, 0), "info");
        assert_eq!(filter_directive(false, 1), "debug");
        assert_eq!(filter_directive(false, 2), "trace");
        assert_eq!(filter_directive(false, 9), "trace");
        assert_eq!(filter_directive(true, 0), "warn");
    }

    // Tests a second installation leaves the first subscriber in place
    #[test]
    fn test_init_logging_once() {
        init_logging("warn");
        assert!(!init_logging("debug"));
    }
}
