//! Property-based tests for dbglog using proptest

use dbglog::core::{Formatter, LogRecord, Result, Sink};
use dbglog::{Logger, Severity};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

struct CountingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Sink for CountingSink {
    fn write(&mut self, record: &LogRecord, formatter: &Formatter) -> Result<()> {
        self.lines.lock().push(formatter.render(record));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn counting_logger(floor: i32) -> (Logger, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .verbosity_floor(floor)
        .to_stderr(false)
        .custom_sink(Box::new(CountingSink {
            lines: Arc::clone(&lines),
        }))
        .build()
        .expect("build logger");
    (logger, lines)
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

proptest! {
    /// For all (level, floor): one line iff level <= floor, zero otherwise.
    #[test]
    fn prop_gate_is_exact(level in -20i32..20, floor in -10i32..10) {
        let (logger, lines) = counting_logger(floor);
        logger.debug(level, "probe", "msg", &[]);

        let expected = usize::from(level <= floor);
        prop_assert_eq!(lines.lock().len(), expected);
    }

    /// Severity never participates in the gating decision.
    #[test]
    fn prop_severity_independent_of_gate(
        severity in any_severity(),
        level in -20i32..20,
        floor in -10i32..10,
    ) {
        let (logger, lines) = counting_logger(floor);
        logger.log(severity, level, "probe", "msg", &[]);

        let expected = usize::from(level <= floor);
        prop_assert_eq!(lines.lock().len(), expected);
    }

    /// Integer args appear space-joined in their original order.
    #[test]
    fn prop_args_preserve_order(values in proptest::collection::vec(-1000i64..1000, 0..6)) {
        let (logger, lines) = counting_logger(0);
        let args: Vec<&dyn std::fmt::Display> =
            values.iter().map(|v| v as &dyn std::fmt::Display).collect();
        logger.info(0, "probe", "vals", &args);

        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut expected = String::from("vals");
        for value in &rendered {
            expected.push(' ');
            expected.push_str(value);
        }
        prop_assert!(lines.lock()[0].ends_with(&expected));
    }

    /// Severity string conversions round-trip.
    #[test]
    fn prop_severity_str_roundtrip(severity in any_severity()) {
        let parsed: Severity = severity.as_str().parse().unwrap();
        prop_assert_eq!(parsed, severity);
    }

    /// Severity ordering is consistent with its numeric rank.
    #[test]
    fn prop_severity_ordering(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    /// The severity token is present iff print_level is set.
    #[test]
    fn prop_print_level_controls_token(print_level in any::<bool>(), severity in any_severity()) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .name("plq")
            .print_level(print_level)
            .to_stderr(false)
            .custom_sink(Box::new(CountingSink { lines: Arc::clone(&lines) }))
            .build()
            .expect("build logger");

        logger.log(severity, 0, "probe", "msg", &[]);

        let line = lines.lock()[0].clone();
        if print_level {
            prop_assert!(line.starts_with(severity.as_str()));
        } else {
            prop_assert!(line.starts_with("plq "));
        }
    }
}
