//! Fixed text used by the enhancement templates.

/// Prefix for section-specific rewrites and their type-mismatch fallbacks.
pub const ENHANCED_PREFIX: &str = "Enhanced: ";

/// Prefix for sections without a dedicated rule.
pub const GENERIC_PREFIX: &str = "AI-enhanced: ";

pub const SUMMARY_SUFFIX: &str = " - With proven expertise in delivering high-impact solutions and driving business growth through innovative technology implementations.";

pub const EXPERIENCE_SUFFIX: &str = " - Demonstrated exceptional leadership and technical skills while consistently exceeding performance targets.";

pub const EDUCATION_SUFFIX: &str = " - Achieved academic excellence with strong foundation in core principles and practical applications.";

/// Appended, in this order, to every enhanced skills list.
pub const EXTRA_SKILLS: [&str; 4] = [
    "Leadership",
    "Problem Solving",
    "Communication",
    "Strategic Planning",
];

pub const PROFESSIONAL_NAME_SUFFIX: &str = " (Professional)";
