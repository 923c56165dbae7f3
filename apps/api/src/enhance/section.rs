/// A named resume section. Matching is exact and case-sensitive; anything
/// unrecognised is carried as `Other` and takes the catch-all rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    Summary,
    Experience,
    Education,
    Skills,
    PersonalInfo,
    Other(&'a str),
}

impl<'a> Section<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name {
            "summary" => Section::Summary,
            "experience" => Section::Experience,
            "education" => Section::Education,
            "skills" => Section::Skills,
            "personalInfo" => Section::PersonalInfo,
            other => Section::Other(other),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::PersonalInfo => "personalInfo",
            Section::Other(name) => *name,
        }
    }
}
