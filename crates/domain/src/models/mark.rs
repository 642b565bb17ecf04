//! Mark and subject domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// A subject taught at the school.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A single graded assessment for one student in one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub exam_type: ExamType,
    pub score: f64,
    pub letter_grade: LetterGrade,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Letter grade on the A-F scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

/// Every letter in reporting order. Distributions are always presented over
/// this full set, zero counts included.
pub const ALL_LETTER_GRADES: [LetterGrade; 5] = [
    LetterGrade::A,
    LetterGrade::B,
    LetterGrade::C,
    LetterGrade::D,
    LetterGrade::F,
];

impl LetterGrade {
    /// Derives the letter for a score on the 0-100 scale.
    ///
    /// The stored letter is always recomputed from the score on write; it is
    /// never accepted from a client.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            LetterGrade::A
        } else if score >= 80.0 {
            LetterGrade::B
        } else if score >= 70.0 {
            LetterGrade::C
        } else if score >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(LetterGrade::A),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "D" => Ok(LetterGrade::D),
            "F" => Ok(LetterGrade::F),
            _ => Err(format!("Invalid letter grade: {}", s)),
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of assessment a mark came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ExamType {
    Quiz,
    Midterm,
    Final,
    Assignment,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Quiz => "quiz",
            ExamType::Midterm => "midterm",
            ExamType::Final => "final",
            ExamType::Assignment => "assignment",
        }
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiz" => Ok(ExamType::Quiz),
            "midterm" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            "assignment" => Ok(ExamType::Assignment),
            _ => Err(format!("Invalid exam type: {}", s)),
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request to record a mark.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordMarkRequest {
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub exam_type: ExamType,
    #[validate(custom(function = "shared::validation::validate_score"))]
    pub score: f64,
    #[validate(custom(function = "shared::validation::validate_record_date"))]
    pub recorded_on: NaiveDate,
}
