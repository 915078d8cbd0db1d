//! Keyword classifier
//!
//! Assigns category labels to transactions by substring search over their
//! descriptions. Rules are tried in table order and the first match wins,
//! so the rule ordering is part of the observable contract. No fuzzy
//! matching; exact substring containment only.

use tracing::debug;

use crate::models::{CategoryRules, Transaction};

/// Classify a single description against the rule table
///
/// The description is lowercased and rules are tried in table order; the
/// first rule owning a keyword contained in the description wins. Returns
/// the table's fallback label when nothing matches.
pub fn categorize<'a>(description: &str, rules: &'a CategoryRules) -> &'a str {
    let lowered = description.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category.as_str())
        .unwrap_or(&rules.fallback)
}

/// Classify every transaction in a batch, returning new records
///
/// Output order matches input order and the input batch is left untouched,
/// so the same records can feed several analyses. Any category already on a
/// record is overwritten; use [`categorize_missing`] to fill gaps only.
pub fn categorize_all(transactions: &[Transaction], rules: &CategoryRules) -> Vec<Transaction> {
    let categorized: Vec<Transaction> = transactions
        .iter()
        .map(|txn| {
            let mut txn = txn.clone();
            txn.category = Some(categorize(&txn.description, rules).to_string());
            txn
        })
        .collect();
    debug!(count = categorized.len(), "classified transaction batch");
    categorized
}

/// Classify only the transactions that carry no category yet
///
/// Pre-assigned labels (e.g. from a statement that already has a category
/// column) are kept as-is.
pub fn categorize_missing(transactions: &[Transaction], rules: &CategoryRules) -> Vec<Transaction> {
    transactions
        .iter()
        .map(|txn| {
            let mut txn = txn.clone();
            if txn.category.is_none() {
                txn.category = Some(categorize(&txn.description, rules).to_string());
            }
            txn
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRule, UNCATEGORIZED};

    #[test]
    fn test_categorize_known_keyword() {
        let rules = CategoryRules::default_rules();
        assert_eq!(categorize("Покупка в Пятерочке", &rules), "Супермаркеты");
        assert_eq!(categorize("оплата uber", &rules), "Такси");
        assert_eq!(categorize("зарплата за январь", &rules), "Зарплата");
    }

    #[test]
    fn test_categorize_no_match_falls_back() {
        let rules = CategoryRules::default_rules();
        assert_eq!(
            categorize("случайный текст без ключевых слов", &rules),
            UNCATEGORIZED
        );
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        let rules = CategoryRules::default_rules();
        assert_eq!(categorize("ПЯТЕРОЧКА 1234", &rules), "Супермаркеты");
        assert_eq!(categorize("UBER trip", &rules), "Такси");
    }

    #[test]
    fn test_overlapping_keyword_first_rule_wins() {
        // "метро" belongs to both Супермаркеты and Общественный транспорт;
        // the supermarket rule is listed first.
        let rules = CategoryRules::default_rules();
        assert_eq!(categorize("метро, проход 14.01", &rules), "Супермаркеты");

        let reversed = CategoryRules::new(vec![
            CategoryRule::new("Общественный транспорт", &["метро"]),
            CategoryRule::new("Супермаркеты", &["метро"]),
        ]);
        assert_eq!(
            categorize("метро, проход 14.01", &reversed),
            "Общественный транспорт"
        );
    }

    #[test]
    fn test_categorize_all_preserves_order_and_input() {
        let rules = CategoryRules::default_rules();
        let input = vec![
            Transaction::new("15.01.2024", -450.0, "Покупка в Пятерочке"),
            Transaction::new("16.01.2024", -230.0, "оплата uber"),
            Transaction::new("17.01.2024", 50000.0, "зарплата"),
        ];

        let categorized = categorize_all(&input, &rules);

        assert_eq!(categorized.len(), 3);
        assert_eq!(categorized[0].category.as_deref(), Some("Супермаркеты"));
        assert_eq!(categorized[1].category.as_deref(), Some("Такси"));
        assert_eq!(categorized[2].category.as_deref(), Some("Зарплата"));
        assert_eq!(categorized[0].description, "Покупка в Пятерочке");

        // input batch is untouched
        assert!(input.iter().all(|txn| txn.category.is_none()));
    }

    #[test]
    fn test_categorize_all_overwrites_existing_label() {
        let rules = CategoryRules::default_rules();
        let input = vec![Transaction::with_category(
            "15.01.2024",
            -450.0,
            "Прочее",
            "Покупка в Пятерочке",
        )];
        let categorized = categorize_all(&input, &rules);
        assert_eq!(categorized[0].category.as_deref(), Some("Супермаркеты"));
    }

    #[test]
    fn test_categorize_missing_keeps_existing_label() {
        let rules = CategoryRules::default_rules();
        let input = vec![
            Transaction::with_category("15.01.2024", -450.0, "Прочее", "Покупка в Пятерочке"),
            Transaction::new("16.01.2024", -230.0, "оплата uber"),
        ];
        let categorized = categorize_missing(&input, &rules);
        assert_eq!(categorized[0].category.as_deref(), Some("Прочее"));
        assert_eq!(categorized[1].category.as_deref(), Some("Такси"));
    }

    #[test]
    fn test_empty_batch() {
        let rules = CategoryRules::default_rules();
        assert!(categorize_all(&[], &rules).is_empty());
    }
}
