//! # Data Models Module / 数据模型模块
//!
//! This module defines the records accumulated during one harness run:
//! the pass/fail outcome per test and the peak temperature per test.
//! Both keep insertion order, which is the order the summary displays.
//!
//! 此模块定义了一次运行期间累积的记录：
//! 每个测试的通过/失败结果以及每个测试的峰值温度。
//! 两者都保持插入顺序，即摘要的显示顺序。

/// An insertion-ordered map from test name to a value.
/// Recording an existing name overwrites the value in place and keeps its position.
///
/// 按插入顺序排列的测试名称到值的映射。
/// 记录已存在的名称会就地覆盖其值并保持其位置。
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedRecord<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedRecord<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedRecord<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V> FromIterator<(N, V)> for OrderedRecord<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Test name → passed.
pub type RunRecord = OrderedRecord<bool>;

/// Test name → peak accelerator temperature in degrees Celsius.
pub type ThermalRecord = OrderedRecord<f64>;

impl RunRecord {
    /// `true` iff every recorded result passed. An empty record passes.
    pub fn all_passed(&self) -> bool {
        self.iter().all(|(_, passed)| *passed)
    }
}

impl ThermalRecord {
    /// The highest temperature recorded across all tests, if any.
    pub fn max_celsius(&self) -> Option<f64> {
        self.iter()
            .map(|(_, celsius)| *celsius)
            .fold(None, |max, value| match max {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }
}
