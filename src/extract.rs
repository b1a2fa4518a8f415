//! Extractors whose rejections answer with the crate's `{"mensagem": ...}`
//! body and status 400 instead of axum's plain-text 415/422.

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts,
};

use crate::error::AppError;

pub const CORPO_INVALIDO: &str = "Dados Inválidos (corpo da requisição).";
pub const ID_NAO_NUMERICO: &str = "Dados Inválidos (ID deve ser um número inteiro).";

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::Validation(CORPO_INVALIDO.into())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
        AppError::Validation(ID_NAO_NUMERICO.into())
    }
}
