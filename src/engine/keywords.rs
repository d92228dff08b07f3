//! Keyword filter for feed entries.
//!
//! Short keywords (three characters or fewer, e.g. "AI", "AWS") only match as whole
//! words so they don't fire inside ordinary words like "said". Longer keywords match
//! as plain case-insensitive substrings.

use regex::Regex;

const WORD_BOUNDARY_MAX_LEN: usize = 3;

#[derive(Debug, Clone)]
enum Rule {
    Word(Regex),
    Substring(String),
}

impl Rule {
    /// `text` must already be lowercased.
    fn is_match(&self, text: &str) -> bool {
        match self {
            Rule::Word(re) => re.is_match(text),
            Rule::Substring(needle) => text.contains(needle.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    rules: Vec<Rule>,
}

impl KeywordMatcher {
    pub fn new(keywords: &[String]) -> Result<Self, regex::Error> {
        let rules = keywords
            .iter()
            .map(|kw| -> Result<Rule, regex::Error> {
                let lower = kw.to_lowercase();
                if kw.chars().count() <= WORD_BOUNDARY_MAX_LEN {
                    let re = Regex::new(&format!(r"\b{}\b", regex::escape(&lower)))?;
                    Ok(Rule::Word(re))
                } else {
                    Ok(Rule::Substring(lower))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.rules.iter().any(|rule| rule.is_match(&lower))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(keywords: &[&str]) -> KeywordMatcher {
        let owned: Vec<String> = keywords.iter().map(|s| s.to_string()).collect();
        KeywordMatcher::new(&owned).unwrap()
    }

    #[test]
    fn test_short_keyword_needs_word_boundary() {
        let m = matcher(&["AI"]);
        assert!(m.matches("New AI chip"));
        assert!(m.matches("ai: the year in review"));
        assert!(m.matches("Why (AI) matters"));
        assert!(!m.matches("He said nothing"));
        assert!(!m.matches("A paid subscription"));
        assert!(!m.matches("Daily brief"));
    }

    #[test]
    fn test_long_keyword_is_substring() {
        let m = matcher(&["OpenAI"]);
        assert!(m.matches("OpenAI releases model"));
        assert!(m.matches("the openai-backed startup"));
        assert!(m.matches("NotOpenAIAtAll"));
        assert!(!m.matches("Open source AI"));
    }

    #[test]
    fn test_multi_word_keyword() {
        let m = matcher(&["machine learning"]);
        assert!(m.matches("Advances in Machine Learning"));
        assert!(!m.matches("machine-learning pipelines"));
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let m = matcher(&["A.I"]);
        assert!(m.matches("The A.I revolution"));
        assert!(!m.matches("the axi bus"));
    }

    #[test]
    fn test_empty_inputs() {
        let m = matcher(&["AI"]);
        assert!(!m.matches(""));

        let none = matcher(&[]);
        assert!(none.is_empty());
        assert!(!none.matches("AI everywhere"));
    }

    #[test]
    fn test_any_keyword_matches() {
        let m = matcher(&["LLM", "Anthropic", "AWS"]);
        assert_eq!(m.len(), 3);
        assert!(m.matches("Anthropic ships an update"));
        assert!(m.matches("Running on AWS"));
        assert!(!m.matches("Jaws 2 remastered"));
    }
}
