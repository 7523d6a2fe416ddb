//! Mint controller.
//!
//! Turns a relay [`MintResult`](crate::models::MintResult) into the success
//! envelope; errors travel back as [`ApiError`] and are rendered by its
//! `ResponseError` implementation.

use actix_web::HttpResponse;

use crate::{
    domain::MintRelayService,
    models::{ApiError, ApiResponse, MintFungibleRequest, MintNonFungibleRequest, MintResponse},
};

pub async fn mint_fungible(
    relay: &MintRelayService,
    request: MintFungibleRequest,
) -> Result<HttpResponse, ApiError> {
    let result = relay.mint_fungible(request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MintResponse::from(result))))
}

pub async fn mint_non_fungible(
    relay: &MintRelayService,
    request: MintNonFungibleRequest,
) -> Result<HttpResponse, ApiError> {
    let result = relay.mint_non_fungible(request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MintResponse::from(result))))
}
