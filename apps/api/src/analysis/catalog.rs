//! Prompt Catalog — a closed set of nine analysis options, eight backed by
//! fixed templates plus one free-text variant.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts;

/// One of the nine categories of requested feedback. Selects a prompt
/// template, except for `Custom`, whose text is supplied at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisOption {
    ResumeReview,
    SkillImprovement,
    MissingKeywords,
    MatchAts,
    MarketInsights,
    CareerPath,
    Upskilling,
    Linkedin,
    Custom,
}

/// The resolved prompt for an option: either a static template or the
/// caller's own question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource<'a> {
    Fixed(&'static str),
    Freeform(&'a str),
}

impl PromptSource<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            PromptSource::Fixed(template) => template,
            PromptSource::Freeform(query) => query,
        }
    }
}

impl AnalysisOption {
    pub const ALL: [AnalysisOption; 9] = [
        AnalysisOption::ResumeReview,
        AnalysisOption::SkillImprovement,
        AnalysisOption::MissingKeywords,
        AnalysisOption::MatchAts,
        AnalysisOption::MarketInsights,
        AnalysisOption::CareerPath,
        AnalysisOption::Upskilling,
        AnalysisOption::Linkedin,
        AnalysisOption::Custom,
    ];

    /// Resolves the prompt for this option. Blank custom queries are rejected
    /// upstream by the flow controller's guard, not here.
    pub fn prompt<'a>(&self, custom_query: &'a str) -> PromptSource<'a> {
        match self {
            AnalysisOption::ResumeReview => PromptSource::Fixed(prompts::RESUME_REVIEW_PROMPT),
            AnalysisOption::SkillImprovement => {
                PromptSource::Fixed(prompts::SKILL_IMPROVEMENT_PROMPT)
            }
            AnalysisOption::MissingKeywords => {
                PromptSource::Fixed(prompts::MISSING_KEYWORDS_PROMPT)
            }
            AnalysisOption::MatchAts => PromptSource::Fixed(prompts::MATCH_ATS_PROMPT),
            AnalysisOption::MarketInsights => PromptSource::Fixed(prompts::MARKET_INSIGHTS_PROMPT),
            AnalysisOption::CareerPath => PromptSource::Fixed(prompts::CAREER_PATH_PROMPT),
            AnalysisOption::Upskilling => PromptSource::Fixed(prompts::UPSKILLING_PROMPT),
            AnalysisOption::Linkedin => PromptSource::Fixed(prompts::LINKEDIN_PROMPT),
            AnalysisOption::Custom => PromptSource::Freeform(custom_query),
        }
    }

    /// Short display title, as shown on the selection cards.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisOption::ResumeReview => "Resume Review",
            AnalysisOption::SkillImprovement => "Skill Improvement",
            AnalysisOption::MissingKeywords => "Missing Keywords",
            AnalysisOption::MatchAts => "ATS Match Check",
            AnalysisOption::MarketInsights => "Market Insights",
            AnalysisOption::CareerPath => "Career Path Options",
            AnalysisOption::Upskilling => "Upskilling Resources",
            AnalysisOption::Linkedin => "LinkedIn",
            AnalysisOption::Custom => "Custom Question",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisOption::ResumeReview => {
                "Get feedback on strengths, weaknesses, and overall impact"
            }
            AnalysisOption::SkillImprovement => "Find areas to improve your skills for this job",
            AnalysisOption::MissingKeywords => {
                "Identify keywords from the job ad missing in your resume"
            }
            AnalysisOption::MatchAts => "Check resume compatibility with ATS systems",
            AnalysisOption::MarketInsights => "Get salary ranges and market trends for this role",
            AnalysisOption::CareerPath => "Explore potential career paths based on your resume",
            AnalysisOption::Upskilling => "Find learning resources for skill gaps",
            AnalysisOption::Linkedin => "Generate an optimized LinkedIn profile summary",
            AnalysisOption::Custom => "Ask a specific question about your job fit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fixed_option_has_a_nonempty_template() {
        for option in AnalysisOption::ALL {
            if option == AnalysisOption::Custom {
                continue;
            }
            match option.prompt("") {
                PromptSource::Fixed(template) => {
                    assert!(!template.trim().is_empty(), "{option:?} has empty template")
                }
                PromptSource::Freeform(_) => panic!("{option:?} should be a fixed template"),
            }
        }
    }

    #[test]
    fn test_custom_passes_query_through_verbatim() {
        let prompt = AnalysisOption::Custom.prompt("Would I fit a staff role?");
        assert_eq!(prompt, PromptSource::Freeform("Would I fit a staff role?"));
        assert_eq!(prompt.as_str(), "Would I fit a staff role?");
    }

    #[test]
    fn test_wire_names_are_snake_case() {
        let cases = [
            (AnalysisOption::ResumeReview, "\"resume_review\""),
            (AnalysisOption::SkillImprovement, "\"skill_improvement\""),
            (AnalysisOption::MissingKeywords, "\"missing_keywords\""),
            (AnalysisOption::MatchAts, "\"match_ats\""),
            (AnalysisOption::MarketInsights, "\"market_insights\""),
            (AnalysisOption::CareerPath, "\"career_path\""),
            (AnalysisOption::Upskilling, "\"upskilling\""),
            (AnalysisOption::Linkedin, "\"linkedin\""),
            (AnalysisOption::Custom, "\"custom\""),
        ];
        for (option, expected) in cases {
            assert_eq!(serde_json::to_string(&option).unwrap(), expected);
            let roundtrip: AnalysisOption = serde_json::from_str(expected).unwrap();
            assert_eq!(roundtrip, option);
        }
    }

    #[test]
    fn test_catalog_has_nine_options() {
        assert_eq!(AnalysisOption::ALL.len(), 9);
    }

    #[test]
    fn test_titles_and_descriptions_are_nonempty() {
        for option in AnalysisOption::ALL {
            assert!(!option.title().is_empty());
            assert!(!option.description().is_empty());
        }
    }
}
