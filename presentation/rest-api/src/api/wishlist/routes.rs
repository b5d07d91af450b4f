use std::sync::Arc;

use poem::{Body, Request};
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::wishlist::use_cases::create::{CreateWishlistParams, CreateWishlistUseCase};
use business::domain::wishlist::use_cases::delete::{DeleteWishlistParams, DeleteWishlistUseCase};
use business::domain::wishlist::use_cases::delete_all::DeleteAllWishlistsUseCase;
use business::domain::wishlist::use_cases::get_all::{
    GetAllWishlistsParams, GetAllWishlistsUseCase,
};
use business::domain::wishlist::use_cases::get_by_id::{
    GetWishlistByIdParams, GetWishlistByIdUseCase,
};
use business::domain::wishlist::use_cases::update::{UpdateWishlistParams, UpdateWishlistUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::media::{read_json, require_json};
use crate::api::security::ApiKeyAuth;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::WishlistResponse;

pub struct WishlistApi {
    create_use_case: Arc<dyn CreateWishlistUseCase>,
    get_all_use_case: Arc<dyn GetAllWishlistsUseCase>,
    get_by_id_use_case: Arc<dyn GetWishlistByIdUseCase>,
    update_use_case: Arc<dyn UpdateWishlistUseCase>,
    delete_use_case: Arc<dyn DeleteWishlistUseCase>,
    delete_all_use_case: Arc<dyn DeleteAllWishlistsUseCase>,
}

impl WishlistApi {
    pub fn new(
        create_use_case: Arc<dyn CreateWishlistUseCase>,
        get_all_use_case: Arc<dyn GetAllWishlistsUseCase>,
        get_by_id_use_case: Arc<dyn GetWishlistByIdUseCase>,
        update_use_case: Arc<dyn UpdateWishlistUseCase>,
        delete_use_case: Arc<dyn DeleteWishlistUseCase>,
        delete_all_use_case: Arc<dyn DeleteAllWishlistsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            delete_all_use_case,
        }
    }
}

/// Path of a single wishlist, used for the `Location` header.
pub fn wishlist_location(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("/wishlists/{id}"),
        None => "/wishlists".to_string(),
    }
}

/// Customer wishlist management API
#[OpenApi]
impl WishlistApi {
    /// List wishlists
    ///
    /// Optionally filtered by owning customer and/or exact name.
    #[oai(path = "/wishlists", method = "get", tag = "ApiTags::Wishlists")]
    async fn list(
        &self,
        customer_id: Query<Option<i64>>,
        name: Query<Option<String>>,
    ) -> ListWishlistsResponse {
        let params = GetAllWishlistsParams {
            customer_id: customer_id.0,
            name: name.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(wishlists) => ListWishlistsResponse::Ok(Json(
                wishlists.into_iter().map(WishlistResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ListWishlistsResponse::ServiceUnavailable(json),
                    _ => ListWishlistsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a wishlist
    ///
    /// Expects a JSON body with `name` and `customer_id`. Any `id` in the body is ignored.
    #[oai(path = "/wishlists", method = "post", tag = "ApiTags::Wishlists")]
    async fn create(&self, _auth: ApiKeyAuth, req: &Request, body: Body) -> CreateWishlistResponse {
        if let Err(json) = require_json(req) {
            return CreateWishlistResponse::UnsupportedMediaType(json);
        }

        let params = CreateWishlistParams {
            data: read_json(body).await,
        };

        match self.create_use_case.execute(params).await {
            Ok(wishlist) => {
                let location = wishlist_location(wishlist.id);
                CreateWishlistResponse::Created(Json(wishlist.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateWishlistResponse::BadRequest(json),
                    503 => CreateWishlistResponse::ServiceUnavailable(json),
                    _ => CreateWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Purge all wishlists
    ///
    /// Deletes every item and wishlist. Ignored unless the service runs in test mode.
    #[oai(path = "/wishlists", method = "delete", tag = "ApiTags::Wishlists")]
    async fn delete_all(&self, _auth: ApiKeyAuth) -> DeleteWishlistResponse {
        match self.delete_all_use_case.execute().await {
            Ok(_) => DeleteWishlistResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => DeleteWishlistResponse::ServiceUnavailable(json),
                    _ => DeleteWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a wishlist
    #[oai(path = "/wishlists/:id", method = "get", tag = "ApiTags::Wishlists")]
    async fn get_by_id(&self, id: Path<i64>) -> WishlistResponseEnvelope {
        match self
            .get_by_id_use_case
            .execute(GetWishlistByIdParams { id: id.0 })
            .await
        {
            Ok(wishlist) => WishlistResponseEnvelope::Ok(Json(wishlist.into())),
            Err(err) => WishlistResponseEnvelope::from_error(err.into_error_response()),
        }
    }

    /// Update a wishlist
    ///
    /// Replaces `name` and `customer_id`. The id in the path always wins over one in the body.
    #[oai(path = "/wishlists/:id", method = "put", tag = "ApiTags::Wishlists")]
    async fn update(
        &self,
        _auth: ApiKeyAuth,
        id: Path<i64>,
        req: &Request,
        body: Body,
    ) -> WishlistResponseEnvelope {
        if let Err(json) = require_json(req) {
            return WishlistResponseEnvelope::UnsupportedMediaType(json);
        }

        let params = UpdateWishlistParams {
            id: id.0,
            data: read_json(body).await,
        };

        match self.update_use_case.execute(params).await {
            Ok(wishlist) => WishlistResponseEnvelope::Ok(Json(wishlist.into())),
            Err(err) => WishlistResponseEnvelope::from_error(err.into_error_response()),
        }
    }

    /// Delete a wishlist
    ///
    /// Also deletes the wishlist's items. Deleting an unknown id still answers 204.
    #[oai(path = "/wishlists/:id", method = "delete", tag = "ApiTags::Wishlists")]
    async fn delete(&self, _auth: ApiKeyAuth, id: Path<i64>) -> DeleteWishlistResponse {
        match self
            .delete_use_case
            .execute(DeleteWishlistParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteWishlistResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => DeleteWishlistResponse::ServiceUnavailable(json),
                    _ => DeleteWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum ListWishlistsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateWishlistResponse {
    #[oai(status = 201)]
    Created(Json<WishlistResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum WishlistResponseEnvelope {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl WishlistResponseEnvelope {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            503 => Self::ServiceUnavailable(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
