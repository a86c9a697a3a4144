//! Category rules and first-match-wins matching.
//!
//! Categories form a closed, statically ordered set. A message is tested
//! against the table in precedence order and the first matching rule wins,
//! so every message gets exactly one label and the output is reproducible
//! for a given table. The cue sets below are part of the engine's versioned
//! contract: downstream prompt text and tests depend on label stability.
//!
//! Matching is plain keyword and phrase scanning over normalized text,
//! O(rules x message length). At chat-message scale that is microseconds,
//! and it keeps v0 free of heavier NLP machinery.

use serde::Serialize;
use std::fmt;

/// Classification categories, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Viewer questions: `?` or an interrogative lead word.
    Questions,
    /// Problem reports: crash/bug/breakage cues.
    IssuesBugs,
    /// Asks directed at the streamer: please/can-you cues.
    Requests,
    /// Everything else.
    GeneralChat,
}

/// Number of categories, including the default.
pub const CATEGORY_COUNT: usize = 4;

impl Category {
    /// All categories in precedence order.
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Questions,
        Self::IssuesBugs,
        Self::Requests,
        Self::GeneralChat,
    ];

    /// Fixed display name of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Questions => "Questions",
            Self::IssuesBugs => "Issues/Bugs",
            Self::Requests => "Requests",
            Self::GeneralChat => "General Chat",
        }
    }

    /// Position in the precedence order (0 = highest).
    #[must_use]
    pub const fn precedence(self) -> usize {
        match self {
            Self::Questions => 0,
            Self::IssuesBugs => 1,
            Self::Requests => 2,
            Self::GeneralChat => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classification rule: a category plus its cue sets.
///
/// `lead_words` match at the start of the normalized text (followed by a
/// word boundary), `phrases` match anywhere as substrings, and
/// `question_mark` matches a literal `?` anywhere. A rule with `catch_all`
/// matches every message; the table ends with one such rule so the matcher
/// has no failure mode.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Category this rule assigns.
    pub category: Category,
    question_mark: bool,
    lead_words: &'static [&'static str],
    phrases: &'static [&'static str],
    catch_all: bool,
}

impl CategoryRule {
    /// Fixed display name of the rule's category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Human-readable cue list for diagnostics and the CLI `rules` command.
    #[must_use]
    pub fn cues(&self) -> Vec<String> {
        if self.catch_all {
            return vec!["(default)".to_string()];
        }
        let mut cues = Vec::new();
        if self.question_mark {
            cues.push("'?'".to_string());
        }
        for word in self.lead_words {
            cues.push(format!("^{word}"));
        }
        for phrase in self.phrases {
            cues.push(format!("\"{phrase}\""));
        }
        cues
    }

    /// Tests the rule against normalized text.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        if self.catch_all {
            return true;
        }
        if self.question_mark && normalized.contains('?') {
            return true;
        }
        if self.lead_words.iter().any(|w| leads_with(normalized, w)) {
            return true;
        }
        self.phrases.iter().any(|p| normalized.contains(p))
    }
}

/// The static rule table, in precedence order.
///
/// The cue sets extend the v0 keyword lists (which are preserved verbatim)
/// with common chat spellings; changing them is a contract change.
pub const RULES: [CategoryRule; CATEGORY_COUNT] = [
    CategoryRule {
        category: Category::Questions,
        question_mark: true,
        lead_words: &["how", "what", "why", "when", "where", "who", "which"],
        phrases: &["can anyone", "does anyone", "anyone know"],
        catch_all: false,
    },
    CategoryRule {
        category: Category::IssuesBugs,
        question_mark: false,
        lead_words: &[],
        phrases: &[
            "bug",
            "error",
            "broken",
            "issue",
            "crash",
            "not working",
            "doesn't work",
            "glitch",
        ],
        catch_all: false,
    },
    CategoryRule {
        category: Category::Requests,
        question_mark: false,
        lead_words: &[],
        phrases: &[
            "please",
            "pls",
            "can you",
            "could you",
            "would you",
            "request",
            "suggestion",
        ],
        catch_all: false,
    },
    CategoryRule {
        category: Category::GeneralChat,
        question_mark: false,
        lead_words: &[],
        phrases: &[],
        catch_all: true,
    },
];

/// Assigns a category to normalized text, first match wins.
///
/// Total: the table's trailing catch-all guarantees an answer.
#[must_use]
pub fn match_category(normalized: &str) -> Category {
    for rule in &RULES {
        if rule.matches(normalized) {
            return rule.category;
        }
    }
    // Unreachable while the table ends with a catch-all rule
    Category::GeneralChat
}

/// Whether `text` starts with `word` at a word boundary.
fn leads_with(text: &str, word: &str) -> bool {
    text.strip_prefix(word).is_some_and(|rest| {
        rest.chars().next().is_none_or(|c| !c.is_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("how do i install this" => Category::Questions; "lead word how")]
    #[test_case("is this live?" => Category::Questions; "question mark")]
    #[test_case("can anyone explain the rules" => Category::Questions; "can anyone phrase")]
    #[test_case("found a bug in the overlay" => Category::IssuesBugs; "bug keyword")]
    #[test_case("stream is broken for me" => Category::IssuesBugs; "broken keyword")]
    #[test_case("audio not working" => Category::IssuesBugs; "not working phrase")]
    #[test_case("please play the next map" => Category::Requests; "please keyword")]
    #[test_case("could you zoom in" => Category::Requests; "could you phrase")]
    #[test_case("great stream today" => Category::GeneralChat; "no cues")]
    #[test_case("" => Category::GeneralChat; "empty text")]
    fn test_match_category(text: &str) -> Category {
        match_category(text)
    }

    #[test]
    fn test_precedence_questions_beat_requests() {
        // Matches both the Requests phrase "can you" and the question mark;
        // table order assigns Questions.
        assert_eq!(match_category("can you explain?"), Category::Questions);
    }

    #[test]
    fn test_precedence_issues_beat_requests() {
        assert_eq!(
            match_category("please fix this bug"),
            Category::IssuesBugs
        );
    }

    #[test]
    fn test_lead_word_requires_boundary() {
        // "howdy" must not count as the lead word "how"
        assert_eq!(match_category("howdy folks"), Category::GeneralChat);
        assert_eq!(match_category("how is it going"), Category::Questions);
        assert_eq!(match_category("how?"), Category::Questions);
        assert_eq!(match_category("how"), Category::Questions);
    }

    #[test]
    fn test_lead_word_only_at_start() {
        // Interrogatives mid-message are not question cues on their own
        assert_eq!(
            match_category("that was what i meant"),
            Category::GeneralChat
        );
    }

    #[test]
    fn test_table_order_matches_precedence() {
        for (index, rule) in RULES.iter().enumerate() {
            assert_eq!(rule.category.precedence(), index);
        }
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(Category::Questions.label(), "Questions");
        assert_eq!(Category::IssuesBugs.label(), "Issues/Bugs");
        assert_eq!(Category::Requests.label(), "Requests");
        assert_eq!(Category::GeneralChat.label(), "General Chat");
    }

    #[test]
    fn test_catch_all_is_last() {
        let last = RULES[CATEGORY_COUNT - 1];
        assert!(last.matches("anything at all"));
        assert_eq!(last.category, Category::GeneralChat);
    }

    #[test]
    fn test_cues_listing() {
        let cues = RULES[0].cues();
        assert!(cues.contains(&"'?'".to_string()));
        assert!(cues.contains(&"^how".to_string()));
        assert_eq!(RULES[CATEGORY_COUNT - 1].cues(), vec!["(default)"]);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::IssuesBugs.to_string(), "Issues/Bugs");
    }
}
