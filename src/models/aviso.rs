use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A notice. Deleting one only clears `ativo`; the row is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Aviso {
    pub id: i32,
    pub titulo: String,
    pub mensagem: String,
    pub ativo: bool,
    pub data_criacao: DateTime<Utc>,
    /// `None` until the first update or delete.
    pub data_edicao: Option<DateTime<Utc>>,
}

// ── Requests ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAvisoRequest {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub mensagem: Option<String>,
}

/// `id` comes from the route, only `mensagem` is read from the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAvisoRequest {
    #[serde(skip)]
    pub id: i32,
    #[serde(default)]
    pub mensagem: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteAvisoRequest {
    pub id: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct GetAvisoRequest {
    pub id: i32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAvisosRequest;

// ── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvisoResponse {
    pub id: i32,
    pub ativo: bool,
    pub titulo: String,
    pub mensagem: String,
    pub data_criacao: DateTime<Utc>,
}

impl From<&Aviso> for CreateAvisoResponse {
    fn from(aviso: &Aviso) -> Self {
        Self {
            id: aviso.id,
            ativo: aviso.ativo,
            titulo: aviso.titulo.clone(),
            mensagem: aviso.mensagem.clone(),
            data_criacao: aviso.data_criacao,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvisoResponse {
    pub mensagem: String,
    pub aviso: UpdateAvisoDto,
}

/// The record's message is exposed as `mensagemAviso` so it does not collide
/// with the confirmation text in [`UpdateAvisoResponse::mensagem`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvisoDto {
    pub id: i32,
    pub ativo: bool,
    pub titulo: String,
    pub mensagem_aviso: String,
    pub data_criacao: DateTime<Utc>,
    pub data_edicao: Option<DateTime<Utc>>,
}

impl From<&Aviso> for UpdateAvisoDto {
    fn from(aviso: &Aviso) -> Self {
        Self {
            id: aviso.id,
            ativo: aviso.ativo,
            titulo: aviso.titulo.clone(),
            mensagem_aviso: aviso.mensagem.clone(),
            data_criacao: aviso.data_criacao,
            data_edicao: aviso.data_edicao,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAvisoResponse {
    pub mensagem: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvisoResponse {
    pub id: i32,
    pub ativo: bool,
    pub titulo: String,
    pub mensagem: String,
    pub data_criacao: DateTime<Utc>,
    pub data_edicao: Option<DateTime<Utc>>,
}

impl From<&Aviso> for GetAvisoResponse {
    fn from(aviso: &Aviso) -> Self {
        Self {
            id: aviso.id,
            ativo: aviso.ativo,
            titulo: aviso.titulo.clone(),
            mensagem: aviso.mensagem.clone(),
            data_criacao: aviso.data_criacao,
            data_edicao: aviso.data_edicao,
        }
    }
}
