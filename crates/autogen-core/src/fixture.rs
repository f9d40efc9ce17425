//! Native Rust counterpart of the `ts/testing.ts` sample.
//!
//! The sample is the input the binding generator is exercised with; this
//! module gives its declarations a Rust shape so generated bindings can be
//! compared against something concrete.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything exposing a no-argument, no-return `test` callable.
pub trait Testable {
    fn test(&self);
}

/// Object-type alias of [`Testable`]; the two are interchangeable.
pub type TTest = dyn Testable;

/// The constructible entity of the sample.
#[derive(Clone, Copy, Serialize)]
pub struct Record {
    internal_num: i64,
    other_num: i64,
    #[serde(skip)]
    test: fn(),
}

fn noop() {}

impl Record {
    pub const DEFAULT_OTHER_NUM: i64 = 1;

    pub fn new(param: i64) -> Self {
        Self {
            internal_num: param,
            other_num: Self::DEFAULT_OTHER_NUM,
            test: noop,
        }
    }

    pub fn internal_num(&self) -> i64 {
        self.internal_num
    }

    pub fn other_num(&self) -> i64 {
        self.other_num
    }

    /// The stored callable, for callers that want to hold on to it.
    pub fn callback(&self) -> fn() {
        self.test
    }
}

impl Testable for Record {
    fn test(&self) {
        (self.test)()
    }
}

// Field-wise on the numeric fields; callables have no meaningful identity.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.internal_num == other.internal_num && self.other_num == other.other_num
    }
}

impl Eq for Record {}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("internal_num", &self.internal_num)
            .field("other_num", &self.other_num)
            .finish_non_exhaustive()
    }
}

/// Named entry point.
pub fn test() -> Record {
    Record::new(1)
}

/// Anonymous entry point bound to a name.
pub const TEST2: fn() -> Record = || Record::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ETest {
    #[serde(rename = "test")]
    Test,
}

impl ETest {
    pub fn as_str(&self) -> &'static str {
        match self {
            ETest::Test => "test",
        }
    }
}

impl fmt::Display for ETest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod mtest {
    pub fn test() {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_keeps_param_and_defaults_other_num() {
        for n in [i64::MIN, -7, 0, 1, 42, i64::MAX] {
            let record = Record::new(n);
            assert_eq!(record.internal_num(), n);
            assert_eq!(record.other_num(), 1);
        }
    }

    #[test]
    fn default_callable_does_nothing() {
        let record = Record::new(3);
        record.test();
        (record.callback())();
        assert_eq!(record, Record::new(3));
    }

    #[test]
    fn both_entry_points_agree() {
        let a = test();
        let b = TEST2();
        assert_eq!(a, b);
        assert_eq!((a.internal_num(), a.other_num()), (1, 1));
    }

    #[test]
    fn record_is_usable_through_the_capability() {
        let record = test();
        let as_trait: &TTest = &record;
        as_trait.test();
        let boxed: Vec<Box<dyn Testable>> = vec![Box::new(record), Box::new(TEST2())];
        boxed.iter().for_each(|t| t.test());
    }

    #[test]
    fn etest_carries_its_string_value() {
        assert_eq!(ETest::Test.as_str(), "test");
        assert_eq!(ETest::Test.to_string(), "test");
        assert_eq!(serde_json::to_string(&ETest::Test).unwrap(), "\"test\"");
        let parsed: ETest = serde_json::from_str("\"test\"").unwrap();
        assert_eq!(parsed, ETest::Test);
    }

    #[test]
    fn record_serializes_numeric_fields_only() {
        let json = serde_json::to_string(&Record::new(5)).unwrap();
        assert_eq!(json, r#"{"internal_num":5,"other_num":1}"#);
        assert_eq!(
            format!("{:?}", Record::new(5)),
            "Record { internal_num: 5, other_num: 1, .. }"
        );
    }

    #[test]
    fn namespace_function_is_a_noop() {
        mtest::test();
    }
}
