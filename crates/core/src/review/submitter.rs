//! Ticket construction and submission.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{info, warn};

use crate::config::Config;
use crate::window::ReviewWindow;
use crate::zendesk::{HelpdeskApi, NewComment, NewTicket};

use super::author::AuthorIdentity;
use super::eligibility::qa_subject;
use super::types::{CandidateArticle, SubmitOutcome, SubmittedArticle};

/// Build the ticket payload for one selected article.
pub fn build_ticket(
    config: &Config,
    window: &ReviewWindow,
    author: &AuthorIdentity,
    article: &CandidateArticle,
) -> NewTicket {
    let html_body = format!(
        "<p>Please review <a href=\"{}\">{}</a> for quality assessment.</p>\
         <p>Last edited by {}. Review requested on {}.</p>",
        article.html_url,
        article.title,
        author.display_name(),
        window.date_label,
    );

    NewTicket {
        subject: qa_subject(&article.title),
        comment: NewComment {
            html_body,
            public: false,
            author_id: config.zendesk.api_user_id,
        },
        requester_id: author.requester_id(config.zendesk.api_user_id),
        brand_id: config.ticket.brand_id,
        ticket_form_id: config.ticket.form_id,
        group_id: config.ticket.group_id,
        priority: config.ticket.priority.clone(),
        tags: vec![window.period_tag.clone()],
    }
}

/// Submit every selected article, fanning the submissions out
/// concurrently and joining once.
///
/// Outcomes are independent: a failed submission is recorded for that
/// article only and the rest proceed. In read-only mode no write is
/// issued and every article records the dry-run sentinel.
pub async fn submit_selected(
    api: &dyn HelpdeskApi,
    config: &Config,
    window: &ReviewWindow,
    selected: &[(AuthorIdentity, Vec<CandidateArticle>)],
) -> HashMap<AuthorIdentity, Vec<SubmittedArticle>> {
    let mut submissions = Vec::new();
    for (author, articles) in selected {
        for article in articles {
            submissions.push(submit_one(api, config, window, author, article));
        }
    }

    let results = join_all(submissions).await;

    let mut per_author: HashMap<AuthorIdentity, Vec<SubmittedArticle>> = HashMap::new();
    for (author, submitted) in results {
        per_author.entry(author).or_default().push(submitted);
    }
    per_author
}

async fn submit_one(
    api: &dyn HelpdeskApi,
    config: &Config,
    window: &ReviewWindow,
    author: &AuthorIdentity,
    article: &CandidateArticle,
) -> (AuthorIdentity, SubmittedArticle) {
    let outcome = if config.review.read_only {
        info!(article = %article.title, "Read-only mode, skipping ticket creation");
        SubmitOutcome::DryRun
    } else {
        let ticket = build_ticket(config, window, author, article);
        match api.create_ticket(&ticket, config.zendesk.api_user_id).await {
            Ok(id) => {
                info!(ticket = id, article = %article.title, "Created QA ticket");
                SubmitOutcome::Created(id)
            }
            Err(e) => {
                warn!(article = %article.title, error = %e, "Ticket creation failed");
                SubmitOutcome::Failed(e.to_string())
            }
        }
    };

    (
        author.clone(),
        SubmittedArticle {
            title: article.title.clone(),
            outcome,
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::config::load_config_from_str;

    use super::*;

    fn config() -> Config {
        load_config_from_str(
            r#"
[zendesk]
subdomain = "acme"
token = "t"
api_user_id = 42

[ticket]
brand_id = 100
form_id = 200
group_id = 300
"#,
        )
        .unwrap()
    }

    fn window() -> ReviewWindow {
        ReviewWindow {
            period_tag: "qa-review-2026-08-01".to_string(),
            date_label: "7 August 2026".to_string(),
            cutoff: Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap(),
        }
    }

    fn article() -> CandidateArticle {
        CandidateArticle {
            id: 1,
            title: "Resetting passwords".to_string(),
            html_url: "https://acme.zendesk.com/hc/en-us/articles/1".to_string(),
            updated_at: Utc.with_ymd_and_hms(2026, 8, 2, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_build_ticket_for_resolved_author() {
        let alice = AuthorIdentity::Resolved {
            id: 9,
            name: "Alice".to_string(),
        };
        let ticket = build_ticket(&config(), &window(), &alice, &article());

        assert_eq!(ticket.subject, "Quality Assessment: Resetting passwords");
        assert_eq!(ticket.requester_id, 9);
        assert_eq!(ticket.comment.author_id, 42);
        assert!(!ticket.comment.public);
        assert_eq!(ticket.brand_id, 100);
        assert_eq!(ticket.ticket_form_id, 200);
        assert_eq!(ticket.group_id, 300);
        assert_eq!(ticket.priority, "normal");
        assert_eq!(ticket.tags, vec!["qa-review-2026-08-01".to_string()]);
        assert!(ticket.comment.html_body.contains("7 August 2026"));
        assert!(ticket
            .comment
            .html_body
            .contains("https://acme.zendesk.com/hc/en-us/articles/1"));
    }

    #[test]
    fn test_build_ticket_placeholder_requester_falls_back_to_api_user() {
        let ticket = build_ticket(
            &config(),
            &window(),
            &AuthorIdentity::ContentBlockEdit,
            &article(),
        );
        assert_eq!(ticket.requester_id, 42);
        assert!(ticket.comment.html_body.contains("Content Block Edit"));
    }
}
