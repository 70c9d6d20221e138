//! Scan records, scores, and the mock detailed report.
//!
//! ScanAlert never performs a real scan: the history list and the detailed
//! report are seed data, and the only runtime behavior is the badge tier
//! derived from a record's numeric score.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Score at or above which a scan is rated [`ScanStatus::Excellent`]
pub const EXCELLENT_THRESHOLD: u8 = 90;

/// Score at or above which a scan is rated [`ScanStatus::Completed`]
pub const COMPLETED_THRESHOLD: u8 = 70;

/// Badge tier for a scan, derived from its numeric score.
///
/// The tier is a pure function of the score -- a record can never carry a
/// status that disagrees with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// Score 90-100
    Excellent,
    /// Score 70-89
    Completed,
    /// Score below 70
    Issues,
}

impl ScanStatus {
    /// Derive the badge tier from a 0-100 score
    pub fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            ScanStatus::Excellent
        } else if score >= COMPLETED_THRESHOLD {
            ScanStatus::Completed
        } else {
            ScanStatus::Issues
        }
    }

    /// Lowercase badge label as shown in the history list
    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::Excellent => "excellent",
            ScanStatus::Completed => "completed",
            ScanStatus::Issues => "issues",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single historical website scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Stable identifier within the history list
    pub id: u32,

    /// Scanned site, without scheme (e.g. "mystore.com")
    pub url: String,

    /// Overall health score, 0-100
    pub score: u8,

    /// Date the scan ran
    pub date: NaiveDate,

    /// Badge tier, always derived from `score`
    pub status: ScanStatus,
}

impl ScanRecord {
    /// Create a record with its status derived from the score
    pub fn new(id: u32, url: impl Into<String>, score: u8, date: NaiveDate) -> Self {
        Self {
            id,
            url: url.into(),
            score: score.min(100),
            date,
            status: ScanStatus::from_score(score),
        }
    }
}

/// The five seed scans shown in the "Recent Scans" list.
///
/// Never mutated at runtime; adding a website does not append here.
pub fn seed_history() -> Vec<ScanRecord> {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("valid seed date");
    vec![
        ScanRecord::new(1, "mystore.com", 85, d(2025, 1, 9)),
        ScanRecord::new(2, "blog.example.com", 72, d(2025, 1, 8)),
        ScanRecord::new(3, "portfolio.dev", 91, d(2025, 1, 7)),
        ScanRecord::new(4, "ecommerce.shop", 68, d(2025, 1, 6)),
        ScanRecord::new(5, "creative.agency", 94, d(2025, 1, 5)),
    ]
}

/// Per-category scores in the sample detailed report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Search engine optimization score
    pub seo: u8,
    /// Page speed score
    pub speed: u8,
    /// Metadata completeness score
    pub meta: u8,
}

impl ScoreBreakdown {
    /// The hard-coded sample report scores
    pub fn sample() -> Self {
        Self {
            seo: 85,
            speed: 72,
            meta: 91,
        }
    }

    /// (label, value) pairs in display order
    pub fn entries(&self) -> [(&'static str, u8); 3] {
        [
            ("SEO Score", self.seo),
            ("Speed Score", self.speed),
            ("Meta Score", self.meta),
        ]
    }
}

/// Severity of a single checklist finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Success,
    Warning,
    Error,
}

impl IssueSeverity {
    /// Single-character marker shown before the finding text
    pub fn glyph(&self) -> &'static str {
        match self {
            IssueSeverity::Success => "+",
            IssueSeverity::Warning => "!",
            IssueSeverity::Error => "x",
        }
    }
}

/// One row in the detailed issues checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub severity: IssueSeverity,
    pub text: &'static str,
    /// Number of occurrences found
    pub count: u32,
}

/// The hard-coded sample issues checklist
pub fn sample_issues() -> Vec<ScanIssue> {
    vec![
        ScanIssue {
            severity: IssueSeverity::Success,
            text: "All meta titles are present",
            count: 12,
        },
        ScanIssue {
            severity: IssueSeverity::Warning,
            text: "Some images missing alt text",
            count: 3,
        },
        ScanIssue {
            severity: IssueSeverity::Error,
            text: "Broken internal links found",
            count: 2,
        },
        ScanIssue {
            severity: IssueSeverity::Success,
            text: "SSL certificate is valid",
            count: 1,
        },
        ScanIssue {
            severity: IssueSeverity::Warning,
            text: "Page load time could be improved",
            count: 1,
        },
    ]
}
