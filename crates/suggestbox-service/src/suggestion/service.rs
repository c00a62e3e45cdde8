//! Suggestion service implementation.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use suggestbox_auth::access::{AccessEvaluator, Operation, Target};
use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_core::types::pagination::{PageRequest, PageResponse};
use suggestbox_database::repositories::{
    DepartmentRepository, ReplyRepository, SuggestionRepository,
};
use suggestbox_entity::suggestion::model::{
    MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH,
};
use suggestbox_entity::suggestion::{
    CreateSuggestion, Reply, Suggestion, SuggestionDetail, SuggestionStatus,
};

use super::tracking::generate_tracking_code;
use crate::context::RequestContext;

/// Attempts at finding an unused tracking code before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;
/// Maximum category length in characters.
const MAX_CATEGORY_LENGTH: usize = 50;
/// Maximum submitter name or class length in characters.
const MAX_SUBMITTER_FIELD_LENGTH: usize = 50;

/// Input for a new suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitSuggestion {
    /// Short title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Addressed department; `None` or `0` addresses all departments.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Optional submitter name.
    #[serde(default)]
    pub submitter_name: Option<String>,
    /// Optional submitter class.
    #[serde(default)]
    pub submitter_class: Option<String>,
    /// Whether the suggestion may appear in the public list.
    #[serde(default)]
    pub is_public: bool,
}

/// Owns suggestion state transitions.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    /// Suggestion repository.
    suggestion_repo: Arc<SuggestionRepository>,
    /// Reply repository.
    reply_repo: Arc<ReplyRepository>,
    /// Department repository.
    department_repo: Arc<DepartmentRepository>,
    /// Access control evaluator.
    evaluator: AccessEvaluator,
}

impl SuggestionService {
    /// Creates a new suggestion service.
    pub fn new(
        suggestion_repo: Arc<SuggestionRepository>,
        reply_repo: Arc<ReplyRepository>,
        department_repo: Arc<DepartmentRepository>,
    ) -> Self {
        Self {
            suggestion_repo,
            reply_repo,
            department_repo,
            evaluator: AccessEvaluator::new(),
        }
    }

    /// Stores a new suggestion and returns its tracking code.
    pub async fn submit(&self, req: SubmitSuggestion) -> AppResult<String> {
        let title = required_text("Title", &req.title, MAX_TITLE_LENGTH)?;
        let content = required_text("Content", &req.content, MAX_CONTENT_LENGTH)?;
        let category = optional_text("Category", req.category, MAX_CATEGORY_LENGTH)?;
        let submitter_name =
            optional_text("Submitter name", req.submitter_name, MAX_SUBMITTER_FIELD_LENGTH)?;
        let submitter_class =
            optional_text("Submitter class", req.submitter_class, MAX_SUBMITTER_FIELD_LENGTH)?;

        let department_id = match req.department_id {
            None | Some(0) => None,
            Some(id) => {
                self.department_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::validation("Invalid department ID"))?;
                Some(id)
            }
        };

        let mut data = CreateSuggestion {
            tracking_code: String::new(),
            title,
            content,
            category: category.unwrap_or_default(),
            department_id,
            submitter_name,
            submitter_class,
            is_public: req.is_public,
        };

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            data.tracking_code = generate_tracking_code();
            if self
                .suggestion_repo
                .tracking_code_exists(&data.tracking_code)
                .await?
            {
                warn!(attempt, "Tracking code collision, retrying");
                continue;
            }
            match self.suggestion_repo.create(&data, Utc::now()).await {
                Ok(created) => {
                    info!(
                        suggestion_id = created.id,
                        tracking_code = %created.tracking_code,
                        department_id = ?created.department_id,
                        "Suggestion submitted"
                    );
                    return Ok(created.tracking_code);
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    warn!(attempt, "Tracking code taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Could not allocate a unique tracking code",
        ))
    }

    /// Looks up a suggestion by its exact tracking code.
    pub async fn lookup_by_tracking_code(&self, code: &str) -> AppResult<SuggestionDetail> {
        let suggestion = self
            .suggestion_repo
            .find_by_tracking_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Suggestion not found"))?;
        self.with_replies(suggestion).await
    }

    /// Lists public, reviewed suggestions, newest first.
    pub async fn list_public(
        &self,
        page: PageRequest,
        department_id: Option<i64>,
    ) -> AppResult<PageResponse<SuggestionDetail>> {
        let department_id = department_id.filter(|id| *id > 0);
        let listed = self.suggestion_repo.list_public(department_id, &page).await?;
        self.page_with_replies(listed).await
    }

    /// Lists the suggestions visible to the caller.
    ///
    /// The department filter is only honored for callers that see every
    /// department.
    pub async fn list_for_admin(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
        status: Option<&str>,
        department_id: Option<i64>,
    ) -> AppResult<PageResponse<SuggestionDetail>> {
        let scope = self.evaluator.scope(Some(&ctx.claims))?;
        let status = status
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<SuggestionStatus>)
            .transpose()?;
        let department_id = if scope.is_cross_department() {
            department_id.filter(|id| *id > 0)
        } else {
            None
        };

        let listed = self
            .suggestion_repo
            .list_scoped(scope, status, department_id, &page)
            .await?;
        self.page_with_replies(listed).await
    }

    /// Returns one suggestion with replies if the caller may read it.
    pub async fn get_for_admin(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> AppResult<SuggestionDetail> {
        let suggestion = self
            .authorized(ctx, id, Operation::ReadSuggestion)
            .await?;
        self.with_replies(suggestion).await
    }

    /// Sets the status of a suggestion.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: i64,
        status: &str,
    ) -> AppResult<SuggestionDetail> {
        let status: SuggestionStatus = status.parse()?;
        let suggestion = self
            .authorized(ctx, id, Operation::UpdateSuggestionStatus)
            .await?;

        if !self
            .suggestion_repo
            .update_status(id, status, Utc::now())
            .await?
        {
            return Err(AppError::not_found("Suggestion not found"));
        }

        info!(
            suggestion_id = id,
            from = %suggestion.status,
            to = %status,
            admin = ctx.username(),
            "Suggestion status changed"
        );

        let updated = self
            .suggestion_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Suggestion not found"))?;
        self.with_replies(updated).await
    }

    /// Adds a reply on behalf of the acting admin.
    pub async fn add_reply(
        &self,
        ctx: &RequestContext,
        id: i64,
        content: &str,
    ) -> AppResult<Reply> {
        let content = required_text("Reply content", content, MAX_CONTENT_LENGTH)?;
        self.authorized(ctx, id, Operation::ReplySuggestion).await?;

        let now = Utc::now();
        let reply = self
            .reply_repo
            .create(id, ctx.admin_id(), &content, now)
            .await?;
        self.suggestion_repo.touch(id, now).await?;

        info!(suggestion_id = id, reply_id = reply.id, admin = ctx.username(), "Reply added");
        Ok(reply)
    }

    /// Adds one upvote and returns the new count.
    pub async fn upvote(&self, id: i64) -> AppResult<i64> {
        self.suggestion_repo
            .increment_upvotes(id)
            .await?
            .ok_or_else(|| AppError::not_found("Suggestion not found"))
    }

    /// Deletes suggestions and their replies.
    ///
    /// Every existing id must be within the caller's scope or nothing is
    /// deleted. Ids that do not exist are skipped.
    pub async fn bulk_delete(&self, ctx: &RequestContext, ids: &[i64]) -> AppResult<u64> {
        if ids.is_empty() {
            return Err(AppError::validation("At least one suggestion ID is required"));
        }

        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let existing = self.suggestion_repo.find_departments(&unique).await?;
        for &(_, department_id) in &existing {
            self.evaluator.evaluate(
                Some(&ctx.claims),
                Operation::DeleteSuggestion,
                Target::Suggestion { department_id },
            )?;
        }

        let ids: Vec<i64> = existing.iter().map(|(id, _)| *id).collect();
        let deleted = self.suggestion_repo.delete_many(&ids).await?;
        info!(deleted, requested = unique.len(), admin = ctx.username(), "Suggestions deleted");
        Ok(deleted)
    }

    /// Loads a suggestion and checks the caller may act on it.
    async fn authorized(
        &self,
        ctx: &RequestContext,
        id: i64,
        operation: Operation,
    ) -> AppResult<Suggestion> {
        let suggestion = self
            .suggestion_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Suggestion not found"))?;
        self.evaluator.evaluate(
            Some(&ctx.claims),
            operation,
            Target::Suggestion {
                department_id: suggestion.department_id,
            },
        )?;
        Ok(suggestion)
    }

    async fn with_replies(&self, suggestion: Suggestion) -> AppResult<SuggestionDetail> {
        let replies = self.reply_repo.list_for_suggestion(suggestion.id).await?;
        Ok(SuggestionDetail {
            suggestion,
            replies,
        })
    }

    async fn page_with_replies(
        &self,
        page: PageResponse<Suggestion>,
    ) -> AppResult<PageResponse<SuggestionDetail>> {
        let PageResponse {
            data,
            total,
            page,
            page_size,
            total_pages,
        } = page;
        let mut details = Vec::with_capacity(data.len());
        for suggestion in data {
            details.push(self.with_replies(suggestion).await?);
        }
        Ok(PageResponse {
            data: details,
            total,
            page,
            page_size,
            total_pages,
        })
    }
}

/// Trims a mandatory text field and checks its length in characters.
fn required_text(field: &str, value: &str, max: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field; blank values become `None`.
fn optional_text(field: &str, value: Option<String>, max: usize) -> AppResult<Option<String>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) if trimmed.chars().count() > max => Err(AppError::validation(format!(
            "{field} must be at most {max} characters"
        ))),
        Some(trimmed) => Ok(Some(trimmed.to_string())),
    }
}
