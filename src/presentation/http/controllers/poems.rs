// src/presentation/http/controllers/poems.rs
use crate::application::{
    dto::{GalleryPage, PoemDto, PoemSummaryDto},
    error::ApplicationError,
    queries::poems::{GetPoemBySlugQuery, ListPoemsQuery},
};
use crate::domain::poem::PoemFilter;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, RawQuery},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Paging and filter parameters shared by every gallery endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GalleryParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub verse_type: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
}

impl GalleryParams {
    fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(0)
    }

    fn filter(&self) -> PoemFilter {
        PoemFilter {
            audience: non_blank(&self.audience),
            occasion: non_blank(&self.occasion),
            content_type: non_blank(&self.content_type),
            style: non_blank(&self.style),
            verse_type: non_blank(&self.verse_type),
            length: non_blank(&self.length),
            language: non_blank(&self.language),
            keyword: non_blank(&self.keyword),
        }
    }

    fn list_query(&self) -> ListPoemsQuery {
        ListPoemsQuery {
            filter: self.filter(),
            page: self.page(),
            per_page: self.per_page(),
        }
    }

    fn slug_query(&self, slug: String) -> GetPoemBySlugQuery {
        GetPoemBySlugQuery {
            slug,
            filter: self.filter(),
            page: self.page(),
            per_page: self.per_page(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

async fn fetch_page(
    state: &HttpState,
    params: &GalleryParams,
) -> HttpResult<GalleryPage<PoemSummaryDto>> {
    state
        .services
        .poem_queries
        .list_poems(params.list_query())
        .await
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/poems",
    params(GalleryParams),
    responses(
        (status = 200, description = "One page of the gallery, newest first.", body = GalleryPage<PoemSummaryDto>)
    ),
    tag = "Poems"
)]
pub async fn list_poems(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GalleryParams>,
) -> HttpResult<Json<GalleryPage<PoemSummaryDto>>> {
    fetch_page(&state, &params).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/poems/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Slug assigned on the requested page"),
        GalleryParams
    ),
    responses(
        (status = 200, description = "The poem behind the slug.", body = PoemDto),
        (status = 404, description = "Slug not present on this page.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Poems"
)]
pub async fn get_poem_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<GalleryParams>,
) -> HttpResult<Json<PoemDto>> {
    fetch_poem(&state, slug, &params).await.map(Json)
}

/// `/api/v1/poems/by-slug/`: the poem whose title normalized to nothing.
pub async fn get_poem_by_empty_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GalleryParams>,
) -> HttpResult<Json<PoemDto>> {
    fetch_poem(&state, String::new(), &params).await.map(Json)
}

async fn fetch_poem(
    state: &HttpState,
    slug: String,
    params: &GalleryParams,
) -> HttpResult<PoemDto> {
    state
        .services
        .poem_queries
        .get_poem_by_slug(params.slug_query(slug))
        .await
        .into_http()
}

#[utoipa::path(
    get,
    path = "/poemsland",
    params(GalleryParams),
    responses(
        (status = 200, description = "Gallery collection view.", body = GalleryPage<PoemSummaryDto>)
    ),
    tag = "PoemsLand"
)]
pub async fn poemsland_index(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GalleryParams>,
) -> HttpResult<Json<GalleryPage<PoemSummaryDto>>> {
    fetch_page(&state, &params).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/poemsland/{slug}",
    params(
        ("slug" = String, Path, description = "Slug assigned on the requested page"),
        GalleryParams
    ),
    responses(
        (status = 200, description = "The poem behind the slug.", body = PoemDto),
        (status = 303, description = "Slug unknown on this page; redirects to the collection view.")
    ),
    tag = "PoemsLand"
)]
pub async fn poemsland_poem(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<GalleryParams>,
    RawQuery(query): RawQuery,
) -> HttpResult<Response> {
    resolve_or_redirect(&state, slug, &params, query.as_deref()).await
}

/// `/poemsland/`: the poem whose title normalized to nothing.
pub async fn poemsland_empty_slug_poem(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GalleryParams>,
    RawQuery(query): RawQuery,
) -> HttpResult<Response> {
    resolve_or_redirect(&state, String::new(), &params, query.as_deref()).await
}

async fn resolve_or_redirect(
    state: &HttpState,
    slug: String,
    params: &GalleryParams,
    query: Option<&str>,
) -> HttpResult<Response> {
    let result = state
        .services
        .poem_queries
        .get_poem_by_slug(params.slug_query(slug))
        .await;

    match result {
        Ok(poem) => Ok(Json(poem).into_response()),
        Err(ApplicationError::NotFound(message)) => {
            let target = collection_uri(query, params.page());
            tracing::info!(%message, %target, "redirecting to collection view");
            Ok(Redirect::to(&target).into_response())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

/// Collection view for the same batch the slug was resolved against.
fn collection_uri(query: Option<&str>, page: u32) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("/poemsland?{query}"),
        None => format!("/poemsland?page={page}"),
    }
}
