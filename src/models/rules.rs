//! Category keyword rules
//!
//! An ordered table mapping category labels to lowercase keywords. Ordering
//! is part of the contract: classification returns the first category whose
//! keyword occurs in a description, so overlapping keywords (e.g. "метро" is
//! both a supermarket chain and the subway) resolve to whichever category is
//! listed first.
//!
//! The table is plain configuration data. A built-in default covers the
//! reference statement exports; users can replace it with a YAML file whose
//! document order becomes the match order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::transaction::UNCATEGORIZED;
use crate::error::{SpendlensError, SpendlensResult};

/// One category with its keyword list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category label assigned on a keyword match
    pub category: String,

    /// Keywords matched as substrings of the lowercased description
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Create a rule, lowercasing every keyword
    pub fn new(category: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            category: category.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Check whether any keyword occurs in an already-lowercased description
    pub fn matches(&self, lowered_description: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_description.contains(keyword.as_str()))
    }
}

/// Ordered rule table plus the fallback label for unmatched descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRules {
    /// Rules in match priority order
    pub rules: Vec<CategoryRule>,

    /// Label returned when no rule matches
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    UNCATEGORIZED.to_string()
}

impl CategoryRules {
    /// Create a rule table with the default fallback label
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self {
            rules,
            fallback: default_fallback(),
        }
    }

    /// Built-in rule table for the reference statement exports
    ///
    /// "метро" appears under both supermarkets and public transport; the
    /// supermarket rule is listed first and therefore always wins for that
    /// keyword.
    pub fn default_rules() -> Self {
        Self::new(vec![
            CategoryRule::new(
                "Супермаркеты",
                &[
                    "пятерочка",
                    "магнит",
                    "перекресток",
                    "лента",
                    "ашан",
                    "метро",
                    "окей",
                    "дикси",
                    "вкусвилл",
                    "билла",
                    "быстроном",
                    "ярче",
                ],
            ),
            CategoryRule::new(
                "Фастфуд",
                &[
                    "вкусно и точка",
                    "rostic's",
                    "теремок",
                    "академия кофе",
                    "бургер кинг",
                    "хан буз",
                    "свиток",
                ],
            ),
            CategoryRule::new(
                "Ресторан",
                &["якитория", "чайхона", "шоколадница", "кофемания"],
            ),
            CategoryRule::new("Такси", &["яндекс.такси", "такси maxim", "uber"]),
            CategoryRule::new("Каршеринг", &["каршеринг", "ситимобил"]),
            CategoryRule::new(
                "Общественный транспорт",
                &["метро", "аэроэкспресс", "ппк", "мцд"],
            ),
            CategoryRule::new(
                "ЖКХ",
                &[
                    "новосибэнергосбыт",
                    "моэк",
                    "ростелеком",
                    "мгтс",
                    "дом.ru",
                    "новосибводоканал",
                ],
            ),
            CategoryRule::new("Связь", &["мтс", "tele2", "мегафон", "билайн"]),
            CategoryRule::new("Онлайн кинотеатры", &["ivi", "oko", "kinopub"]),
            CategoryRule::new(
                "Онлайн-сервисы",
                &[
                    "яндекс.плюс",
                    "vk",
                    "steam",
                    "youtube premium",
                    "apple music",
                    "spotify",
                ],
            ),
            CategoryRule::new("Маркетплейсы", &["ozon", "wildberries", "яндекс.маркет"]),
            CategoryRule::new(
                "Развлечения",
                &["кинотеатр", "арена", "цирк", "парк", "зоопарк"],
            ),
            CategoryRule::new(
                "Магазины электроники",
                &["м.видео", "эльдорадо", "связной", "евросеть", "dns"],
            ),
            CategoryRule::new("Зарплата", &["зарплата"]),
            CategoryRule::new("Переводы", &["перевод"]),
        ])
    }

    /// Load a rule table from a YAML reader
    ///
    /// The document order of the rule list becomes the match order. Keywords
    /// are lowercased so hand-edited files behave the same as the built-in
    /// table. An empty rule list is a configuration error.
    pub fn from_yaml_reader<R: Read>(reader: R) -> SpendlensResult<Self> {
        let mut rules: CategoryRules = serde_yaml::from_reader(reader)?;
        if rules.rules.is_empty() {
            return Err(SpendlensError::Config(
                "rules file contains no rules".to_string(),
            ));
        }
        rules.normalize();
        Ok(rules)
    }

    /// Load a rule table from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> SpendlensResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SpendlensError::Config(format!("cannot read rules file '{}': {}", path.display(), e))
        })?;
        Self::from_yaml_reader(file)
    }

    /// Serialize the table to YAML
    pub fn to_yaml(&self) -> SpendlensResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Iterate rules in match order
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryRule> {
        self.rules.iter()
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn normalize(&mut self) {
        for rule in &mut self.rules {
            for keyword in &mut rule.keywords {
                if keyword.chars().any(char::is_uppercase) {
                    *keyword = keyword.to_lowercase();
                }
            }
        }
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::default_rules()
    }
}
