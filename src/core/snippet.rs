use crate::core::arith;
use crate::core::sequence::{double_all, NUMBERS};
use crate::core::threshold::write_age_group;
use crate::domain::model::{AgeGroup, User};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// 對外匯出的值：使用者、原始序列與加倍後的序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    user: User,
    numbers: Vec<i64>,
    doubled: Vec<i64>,
}

impl Snippet {
    pub fn new() -> Self {
        Self::with_user(User::default())
    }

    pub fn with_user(user: User) -> Self {
        let numbers = NUMBERS.to_vec();
        let doubled = double_all(&numbers);
        Self {
            user,
            numbers,
            doubled,
        }
    }

    pub fn add(&self, x: i64, y: i64) -> i64 {
        arith::add(x, y)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn doubled(&self) -> &[i64] {
        &self.doubled
    }

    pub fn exports_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<AgeGroup> {
        write_age_group(&self.user, out)
    }
}

impl Default for Snippet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_json_shape() {
        let json = Snippet::new().exports_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["user"]["name"], "John");
        assert_eq!(value["user"]["age"], 30);
        assert_eq!(value["user"]["email"], "john@example.com");
        assert_eq!(value["numbers"], serde_json::json!([1, 2, 3, 4, 5]));
        assert_eq!(value["doubled"], serde_json::json!([2, 4, 6, 8, 10]));
    }

    #[test]
    fn test_run_leaves_record_untouched() {
        let snippet = Snippet::new();
        let mut out = Vec::new();
        snippet.run(&mut out).unwrap();
        snippet.run(&mut out).unwrap();

        assert_eq!(snippet.user(), &User::default());
        assert_eq!(snippet.numbers(), &[1, 2, 3, 4, 5]);
        assert_eq!(String::from_utf8(out).unwrap(), "Adult\nAdult\n");
    }
}
