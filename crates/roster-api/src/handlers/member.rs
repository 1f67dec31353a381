//! Member search handlers.

use axum::Json;
use axum::extract::{Path, State};

use roster_core::error::AppError;
use roster_core::types::Page;
use roster_entity::member::Member;
use roster_entity::search::{MemberSearchCondition, MemberTeamDto};

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_member_id;
use crate::extractors::{ApiQuery, PaginationParams};
use crate::state::AppState;

/// GET /v1/members
///
/// Every matching member, unpaged.
pub async fn search_members_v1(
    State(state): State<AppState>,
    ApiQuery(condition): ApiQuery<MemberSearchCondition>,
) -> Result<Json<ApiResponse<Vec<MemberTeamDto>>>, ApiError> {
    let rows = state.member_repo.search(&condition).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// GET /v1/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Member>>, ApiError> {
    let id = parse_member_id(&id)?;
    let member = state
        .member_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))?;
    Ok(Json(ApiResponse::ok(member)))
}

/// GET /v2/members
///
/// A page of matches; the total is always counted.
pub async fn search_members_v2(
    State(state): State<AppState>,
    ApiQuery(condition): ApiQuery<MemberSearchCondition>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<ApiResponse<Page<MemberTeamDto>>>, ApiError> {
    let page = params.into_page_request(state.config.search.default_page_size)?;
    let result = state
        .member_repo
        .search_page_simple(&condition, &page)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /v3/members
///
/// A page of matches; the count query is skipped when the first page is
/// short.
pub async fn search_members_v3(
    State(state): State<AppState>,
    ApiQuery(condition): ApiQuery<MemberSearchCondition>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<ApiResponse<Page<MemberTeamDto>>>, ApiError> {
    let page = params.into_page_request(state.config.search.default_page_size)?;
    let result = state
        .member_repo
        .search_page_optimized(&condition, &page)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}
