//! Ranking normalizer
//!
//! Fixed iteration order: sections Title, Bullet Points, Description,
//! Backend Keywords; within each, checks Restricted Words, Special
//! Characters, Character Limit. The top-level character-limit check emits
//! last, with no sub-check suffix in its heading.

use super::push_valid;
use shared::models::{CheckResult, IssueRow, RankingProduct, SectionChecks};

/// Convert one ranking payload into issue rows
pub fn normalize_ranking(product: &RankingProduct) -> Vec<IssueRow> {
    let mut rows = Vec::new();
    let Some(data) = &product.data else {
        return rows;
    };

    let sections: [(&str, Option<&SectionChecks>); 4] = [
        ("Title", data.title_result.as_ref()),
        ("Bullet Points", data.bullet_points.as_ref()),
        ("Description", data.description.as_ref()),
        ("Backend Keywords", data.backend_keywords.as_ref()),
    ];

    for (section_label, section) in sections {
        let Some(section) = section else { continue };
        let checks: [(&str, Option<&CheckResult>); 3] = [
            ("Restricted Words", section.restricted_words.as_ref()),
            ("Special Characters", section.special_characters.as_ref()),
            ("Character Limit", section.char_lim.as_ref()),
        ];
        for (check_label, check) in checks {
            if let Some(check) = check
                && check.is_error()
            {
                push_valid(
                    &mut rows,
                    check_row(
                        product,
                        format!("{} | {}", section_label, check_label),
                        check,
                    ),
                );
            }
        }
    }

    if let Some(check) = &data.char_lim
        && check.is_error()
    {
        push_valid(&mut rows, check_row(product, "Character Limit".into(), check));
    }

    rows
}

fn check_row(product: &RankingProduct, heading: String, check: &CheckResult) -> IssueRow {
    IssueRow::new(
        &product.asin,
        product.sku.clone(),
        product.title.clone(),
        heading,
        check.message.clone().unwrap_or_default(),
        check.how_to_solve.clone().unwrap_or_default(),
    )
}
