//! Rule-based insight generation for the staff dashboard.
//!
//! Three rule families run in a fixed order: weak subjects, the
//! attendance/score link, then struggling sections. The output is plain
//! sentences; the dashboard renders them as a bulleted list.

use crate::models::analytics::{OverallAverages, SectionAverage, SubjectAverage};
use crate::services::reporting::round2;

/// Returned alone when no rule fires.
pub const DEFAULT_INSIGHT: &str = "No critical academic risks detected at this time.";

/// A bottom-three subject below this average gets a callout.
pub const SUBJECT_ALERT_AVERAGE: f64 = 60.0;

/// Attendance-impact message fires when overall attendance is below this...
pub const ATTENDANCE_IMPACT_RATE: f64 = 75.0;

/// ...and the overall average score is below this at the same time.
pub const ATTENDANCE_IMPACT_SCORE: f64 = 60.0;

/// A section below this average gets a callout.
pub const SECTION_ALERT_AVERAGE: f64 = 50.0;

/// Assembles the insight list.
///
/// `weak_subjects` is expected pre-sorted ascending by average (the three
/// lowest); `sections` likewise ascending. Order of the output is part of
/// the contract: subjects, then attendance, then sections.
pub fn build_insights(
    weak_subjects: &[SubjectAverage],
    overall: OverallAverages,
    sections: &[SectionAverage],
) -> Vec<String> {
    let mut insights = Vec::new();

    for subject in weak_subjects {
        if subject.average_score < SUBJECT_ALERT_AVERAGE {
            insights.push(format!(
                "Average in {} is {}% across {} marks; consider a review session.",
                subject.name,
                round2(subject.average_score),
                subject.mark_count
            ));
        }
    }

    if let (Some(attendance), Some(score)) = (overall.attendance_pct, overall.average_score) {
        if attendance < ATTENDANCE_IMPACT_RATE && score < ATTENDANCE_IMPACT_SCORE {
            insights.push(format!(
                "Overall attendance is {}% and the school-wide average score is {}%; \
                 low attendance is likely dragging results down.",
                round2(attendance),
                round2(score)
            ));
        }
    }

    for section in sections {
        if section.average_score < SECTION_ALERT_AVERAGE {
            insights.push(format!(
                "Section {} is averaging {}%; it needs attention.",
                section.name,
                round2(section.average_score)
            ));
        }
    }

    if insights.is_empty() {
        insights.push(DEFAULT_INSIGHT.to_string());
    }

    tracing::debug!(count = insights.len(), "insights assembled");
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, average: f64, marks: i64) -> SubjectAverage {
        SubjectAverage {
            name: name.to_string(),
            average_score: average,
            mark_count: marks,
        }
    }

    fn section(name: &str, average: f64) -> SectionAverage {
        SectionAverage {
            name: name.to_string(),
            average_score: average,
        }
    }

    #[test]
    fn test_default_when_nothing_fires() {
        let insights = build_insights(&[], OverallAverages::default(), &[]);
        assert_eq!(insights, vec![DEFAULT_INSIGHT.to_string()]);
    }

    #[test]
    fn test_default_when_everything_healthy() {
        let insights = build_insights(
            &[subject("Maths", 72.0, 40)],
            OverallAverages {
                average_score: Some(75.0),
                attendance_pct: Some(92.0),
            },
            &[section("8-A", 75.0)],
        );
        assert_eq!(insights, vec![DEFAULT_INSIGHT.to_string()]);
    }

    #[test]
    fn test_weak_subject_insight() {
        let insights = build_insights(
            &[subject("Physics", 52.5, 30)],
            OverallAverages::default(),
            &[],
        );

        assert_eq!(insights.len(), 1);
        assert_eq!(
            insights[0],
            "Average in Physics is 52.5% across 30 marks; consider a review session."
        );
    }

    #[test]
    fn test_attendance_impact_requires_both_conditions() {
        // Low attendance alone, decent scores: no message
        let healthy_scores = build_insights(
            &[],
            OverallAverages {
                average_score: Some(70.0),
                attendance_pct: Some(60.0),
            },
            &[],
        );
        assert_eq!(healthy_scores, vec![DEFAULT_INSIGHT.to_string()]);

        // Both low: message fires
        let both_low = build_insights(
            &[],
            OverallAverages {
                average_score: Some(55.0),
                attendance_pct: Some(60.0),
            },
            &[],
        );
        assert_eq!(both_low.len(), 1);
        assert!(both_low[0].contains("Overall attendance is 60%"));
    }

    #[test]
    fn test_section_insight() {
        let insights = build_insights(
            &[],
            OverallAverages::default(),
            &[section("9-C", 43.21)],
        );

        assert_eq!(
            insights,
            vec!["Section 9-C is averaging 43.21%; it needs attention.".to_string()]
        );
    }

    #[test]
    fn test_category_order_is_fixed() {
        let insights = build_insights(
            &[subject("Chemistry", 48.0, 25)],
            OverallAverages {
                average_score: Some(50.0),
                attendance_pct: Some(65.0),
            },
            &[section("7-B", 44.0)],
        );

        assert_eq!(insights.len(), 3);
        assert!(insights[0].starts_with("Average in Chemistry"));
        assert!(insights[1].starts_with("Overall attendance"));
        assert!(insights[2].starts_with("Section 7-B"));
    }

    #[test]
    fn test_multiple_weak_subjects_keep_given_order() {
        let insights = build_insights(
            &[subject("Physics", 41.0, 10), subject("History", 55.0, 12)],
            OverallAverages::default(),
            &[],
        );

        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("Physics"));
        assert!(insights[1].contains("History"));
    }

    #[test]
    fn test_subject_at_threshold_not_reported() {
        let insights = build_insights(
            &[subject("Biology", 60.0, 20)],
            OverallAverages::default(),
            &[],
        );
        assert_eq!(insights, vec![DEFAULT_INSIGHT.to_string()]);
    }
}
