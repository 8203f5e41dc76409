//! Brand and article fetching.
//!
//! Brands are processed sequentially; one brand's feed is followed to
//! exhaustion before the next starts. A failing brand is logged and
//! skipped so the sweep degrades to reduced completeness instead of
//! aborting.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::ReviewConfig;
use crate::window::ReviewWindow;
use crate::zendesk::{
    normalize_next_page, ArticlePage, Brand, HelpdeskApi, TransportError, ZendeskClient,
};

use super::author::resolve_author;
use super::eligibility::is_eligible;
use super::types::{CandidateArticle, CandidateSet};

/// Subjects of QA tickets already filed this period.
///
/// Precondition for filtering: failure here must abort the sweep before
/// any brand is touched.
pub async fn existing_qa_subjects(
    api: &dyn HelpdeskApi,
    period_tag: &str,
) -> Result<HashSet<String>, TransportError> {
    let subjects = api.ticket_subjects_tagged(period_tag).await?;
    Ok(subjects.into_iter().collect())
}

/// Accumulate eligible articles per author across all active,
/// non-excluded brands.
pub async fn collect_candidates(
    api: &dyn HelpdeskApi,
    review: &ReviewConfig,
    window: &ReviewWindow,
    existing_subjects: &HashSet<String>,
) -> Result<CandidateSet, TransportError> {
    let brands = api.list_brands().await?;

    let mut candidates = CandidateSet::new();
    for brand in &brands {
        if !brand.active {
            debug!(brand = %brand.name, "Skipping inactive brand");
            continue;
        }
        if review.excluded_brands.iter().any(|b| b == &brand.name) {
            debug!(brand = %brand.name, "Skipping excluded brand");
            continue;
        }

        info!(brand = %brand.name, "Scanning brand for recently edited articles");
        if let Err(e) = scan_brand(api, brand, review, window, existing_subjects, &mut candidates).await
        {
            warn!(
                brand = %brand.name,
                error = %e,
                "Brand scan failed, continuing with remaining brands"
            );
        }
    }
    Ok(candidates)
}

/// Follow one brand's incremental feed to exhaustion. Pagination links
/// are normalized before the next fetch.
async fn scan_brand(
    api: &dyn HelpdeskApi,
    brand: &Brand,
    review: &ReviewConfig,
    window: &ReviewWindow,
    existing_subjects: &HashSet<String>,
    candidates: &mut CandidateSet,
) -> Result<(), TransportError> {
    let mut url =
        ZendeskClient::incremental_articles_url(&brand.subdomain, window.cutoff.timestamp());
    loop {
        let page = api.article_page(&url).await?;
        ingest_page(&page, review, window, existing_subjects, candidates);
        match &page.next_page {
            Some(next) => url = normalize_next_page(next),
            None => break,
        }
    }
    Ok(())
}

/// Resolve authors and apply the eligibility filter to one page.
fn ingest_page(
    page: &ArticlePage,
    review: &ReviewConfig,
    window: &ReviewWindow,
    existing_subjects: &HashSet<String>,
    candidates: &mut CandidateSet,
) {
    for article in &page.articles {
        let Some(translation) = article.translations.first() else {
            debug!(article = article.id, "Article has no translations, skipping");
            continue;
        };

        let author = resolve_author(translation.updated_by_id, &page.users);
        if !is_eligible(
            &author,
            translation.updated_at,
            &article.title,
            window.cutoff,
            &review.excluded_names,
            existing_subjects,
        ) {
            continue;
        }

        debug!(article = article.id, author = author.display_name(), "Eligible article");
        candidates.entry(author).or_default().push(CandidateArticle {
            id: article.id,
            title: article.title.clone(),
            html_url: article.html_url.clone(),
            updated_at: translation.updated_at,
        });
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::config::ReviewConfig;
    use crate::zendesk::{Article, Translation, User, CONTENT_BLOCK_EDITOR_ID};

    use super::super::author::AuthorIdentity;
    use super::*;

    fn window() -> ReviewWindow {
        ReviewWindow {
            period_tag: "qa-review-2026-08-01".to_string(),
            date_label: "7 August 2026".to_string(),
            cutoff: Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap(),
        }
    }

    fn article(id: i64, title: &str, editor: i64, days_after_cutoff: i64) -> Article {
        Article {
            id,
            title: title.to_string(),
            html_url: format!("https://acme.zendesk.com/hc/en-us/articles/{}", id),
            translations: vec![Translation {
                updated_at: window().cutoff + Duration::days(days_after_cutoff),
                updated_by_id: editor,
            }],
        }
    }

    #[test]
    fn test_ingest_groups_by_author() {
        let page = ArticlePage {
            articles: vec![
                article(1, "One", 9, 1),
                article(2, "Two", 9, 2),
                article(3, "Three", 10, 3),
            ],
            users: vec![
                User {
                    id: 9,
                    name: "Alice".to_string(),
                },
                User {
                    id: 10,
                    name: "Bob".to_string(),
                },
            ],
            next_page: None,
        };

        let mut candidates = CandidateSet::new();
        ingest_page(
            &page,
            &ReviewConfig::default(),
            &window(),
            &HashSet::new(),
            &mut candidates,
        );

        let alice = AuthorIdentity::Resolved {
            id: 9,
            name: "Alice".to_string(),
        };
        let bob = AuthorIdentity::Resolved {
            id: 10,
            name: "Bob".to_string(),
        };
        assert_eq!(candidates[&alice].len(), 2);
        assert_eq!(candidates[&bob].len(), 1);
    }

    #[test]
    fn test_ingest_separates_placeholder_identities() {
        let page = ArticlePage {
            articles: vec![
                article(1, "Propagated", CONTENT_BLOCK_EDITOR_ID, 1),
                article(2, "Orphan edit", 999, 1),
            ],
            users: vec![],
            next_page: None,
        };

        let mut candidates = CandidateSet::new();
        ingest_page(
            &page,
            &ReviewConfig::default(),
            &window(),
            &HashSet::new(),
            &mut candidates,
        );

        assert_eq!(candidates[&AuthorIdentity::ContentBlockEdit].len(), 1);
        assert_eq!(candidates[&AuthorIdentity::LookupFailed].len(), 1);
    }

    #[test]
    fn test_ingest_skips_article_without_translations() {
        let page = ArticlePage {
            articles: vec![Article {
                id: 1,
                title: "No translations".to_string(),
                html_url: "https://acme.zendesk.com/hc/en-us/articles/1".to_string(),
                translations: vec![],
            }],
            users: vec![],
            next_page: None,
        };

        let mut candidates = CandidateSet::new();
        ingest_page(
            &page,
            &ReviewConfig::default(),
            &window(),
            &HashSet::new(),
            &mut candidates,
        );
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_ingest_applies_eligibility() {
        let review = ReviewConfig {
            excluded_names: vec!["Bob".to_string()],
            ..ReviewConfig::default()
        };
        let page = ArticlePage {
            articles: vec![
                article(1, "Too old", 9, -1),
                article(2, "Excluded author", 10, 1),
                article(3, "Fine", 9, 1),
            ],
            users: vec![
                User {
                    id: 9,
                    name: "Alice".to_string(),
                },
                User {
                    id: 10,
                    name: "Bob".to_string(),
                },
            ],
            next_page: None,
        };

        let mut candidates = CandidateSet::new();
        ingest_page(&page, &review, &window(), &HashSet::new(), &mut candidates);

        assert_eq!(candidates.len(), 1);
        let alice = AuthorIdentity::Resolved {
            id: 9,
            name: "Alice".to_string(),
        };
        assert_eq!(candidates[&alice].len(), 1);
        assert_eq!(candidates[&alice][0].title, "Fine");
    }
}
