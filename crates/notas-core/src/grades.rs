//! Grade tracker.
//!
//! Holds the grades entered on one visit to the grade screen. The tracker is
//! owned by the mounted screen and dropped with it; nothing here outlives a
//! visit.

use std::fmt;

use chrono::Utc;
use thiserror::Error;

use crate::nav::{Navigator, Route};

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 5.0;

/// Average shown while no grade has been entered.
pub const EMPTY_AVERAGE: &str = "0.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradeError {
    /// Text did not parse as a number, or the number is outside 0..=5.
    #[error("No valido")]
    InvalidGradeInput,
}

/// Opaque grade identifier: creation time in milliseconds, bumped to stay
/// strictly increasing within one tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GradeId(i64);

impl fmt::Display for GradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
struct IdClock {
    last: i64,
}

impl IdClock {
    fn next_id(&mut self) -> GradeId {
        let now = Utc::now().timestamp_millis();
        let next = if now > self.last { now } else { self.last + 1 };
        self.last = next;
        GradeId(next)
    }
}

/// A recorded grade.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: GradeId,
    /// `"nota N"`, N being the 1-based position at insertion time.
    pub label: String,
    pub value: f64,
}

impl Grade {
    /// History row text, e.g. `nota 2: 4.50`.
    pub fn display_row(&self) -> String {
        format!("{}: {:.2}", self.label, self.value)
    }
}

/// Parses grade text.
///
/// Leading whitespace is skipped and the longest leading decimal number is
/// read; anything after it is ignored, so `"3,5"` reads as `3` and `"4 pts"`
/// as `4`. Text without a leading number is rejected. The value must lie in
/// `0..=5`.
pub fn parse_grade(text: &str) -> Result<f64, GradeError> {
    let Some(number) = leading_decimal(text.trim_start()) else {
        return Err(GradeError::InvalidGradeInput);
    };
    let Ok(value) = number.parse::<f64>() else {
        return Err(GradeError::InvalidGradeInput);
    };
    if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
        return Err(GradeError::InvalidGradeInput);
    }
    // -0.0 + 0.0 == +0.0, so "-0" renders as 0.00
    Ok(value + 0.0)
}

/// Longest prefix of `text` shaped like `[+-]digits[.digits][e[+-]digits]`,
/// with at least one mantissa digit.
fn leading_decimal(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    Some(&text[..end])
}

/// Formats the mean of `values` with two decimals, or `"0.00"` when empty.
pub fn format_average(values: impl IntoIterator<Item = f64>) -> String {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return EMPTY_AVERAGE.to_string();
    }
    format!("{:.2}", sum / count as f64)
}

/// Grade screen state: recorded grades, the text being typed, and the inline
/// error left by the last failed add.
#[derive(Debug, Default)]
pub struct GradeTracker {
    grades: Vec<Grade>,
    current_input: String,
    error: Option<GradeError>,
    ids: IdClock,
}

impl GradeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn error(&self) -> Option<GradeError> {
        self.error
    }

    /// Inline error text, present until the next successful add or clear.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.current_input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.current_input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.current_input.pop();
    }

    /// Validates the current input and appends it as a new grade.
    ///
    /// On failure the error is recorded, the grades are untouched and the
    /// input is kept for correction. On success the error and the input are
    /// cleared. Adding the same value twice records two grades.
    pub fn add_grade(&mut self) -> Result<&Grade, GradeError> {
        let value = match parse_grade(&self.current_input) {
            Ok(value) => value,
            Err(err) => {
                self.error = Some(err);
                return Err(err);
            }
        };

        self.error = None;
        let grade = Grade {
            id: self.ids.next_id(),
            label: format!("nota {}", self.grades.len() + 1),
            value,
        };
        self.grades.push(grade);
        self.current_input.clear();

        let last = self.grades.len() - 1;
        Ok(&self.grades[last])
    }

    /// Mean of all grades with two decimals. Recomputed on every call.
    pub fn calculate_average(&self) -> String {
        format_average(self.grades.iter().map(|g| g.value))
    }

    /// Drops all grades, the typed text and the error.
    pub fn clear_all(&mut self) {
        self.grades.clear();
        self.current_input.clear();
        self.error = None;
    }

    /// Leaves the grade screen, replacing it with the login screen.
    ///
    /// The tracker itself is left as is; it goes away with the screen entry.
    pub fn exit(&self, navigator: &mut impl Navigator) {
        navigator.replace(Route::Login);
    }
}
