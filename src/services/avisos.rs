use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::{AppError, OperationResult},
    models::aviso::{
        CreateAvisoRequest, CreateAvisoResponse, DeleteAvisoRequest, DeleteAvisoResponse,
        GetAvisoRequest, GetAvisoResponse, GetAvisosRequest, UpdateAvisoDto,
        UpdateAvisoRequest, UpdateAvisoResponse,
    },
    repository::AvisoRepository,
    services::mediator::{Mediator, Request, RequestHandler},
};

impl Request for CreateAvisoRequest {
    const NAME: &'static str = "CreateAviso";
    type Response = CreateAvisoResponse;
}

impl Request for UpdateAvisoRequest {
    const NAME: &'static str = "UpdateAviso";
    type Response = UpdateAvisoResponse;
}

impl Request for DeleteAvisoRequest {
    const NAME: &'static str = "DeleteAviso";
    type Response = DeleteAvisoResponse;
}

impl Request for GetAvisoRequest {
    const NAME: &'static str = "GetAviso";
    type Response = GetAvisoResponse;
}

impl Request for GetAvisosRequest {
    const NAME: &'static str = "GetAvisos";
    type Response = Vec<GetAvisoResponse>;
}

/// Builds a mediator with every aviso handler wired to `repository`.
pub fn build_mediator(repository: Arc<dyn AvisoRepository>) -> Result<Mediator, AppError> {
    let mediator = Mediator::new();
    mediator.register::<CreateAvisoRequest, _>(Arc::new(CreateAvisoHandler::new(
        repository.clone(),
    )))?;
    mediator.register::<UpdateAvisoRequest, _>(Arc::new(UpdateAvisoHandler::new(
        repository.clone(),
    )))?;
    mediator.register::<DeleteAvisoRequest, _>(Arc::new(DeleteAvisoHandler::new(
        repository.clone(),
    )))?;
    mediator.register::<GetAvisoRequest, _>(Arc::new(GetAvisoHandler::new(repository.clone())))?;
    mediator.register::<GetAvisosRequest, _>(Arc::new(GetAvisosHandler::new(repository)))?;
    Ok(mediator)
}

pub struct CreateAvisoHandler {
    repository: Arc<dyn AvisoRepository>,
}

impl CreateAvisoHandler {
    pub fn new(repository: Arc<dyn AvisoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<CreateAvisoRequest> for CreateAvisoHandler {
    async fn handle(
        &self,
        request: CreateAvisoRequest,
    ) -> Result<OperationResult<CreateAvisoResponse>, AppError> {
        let titulo = request.titulo.unwrap_or_default();
        let mensagem = request.mensagem.unwrap_or_default();

        let aviso = self.repository.create(&titulo, &mensagem).await?;
        tracing::info!(aviso_id = aviso.id, "Aviso created");

        Ok(OperationResult::Created(CreateAvisoResponse::from(&aviso)))
    }
}

pub struct UpdateAvisoHandler {
    repository: Arc<dyn AvisoRepository>,
}

impl UpdateAvisoHandler {
    pub fn new(repository: Arc<dyn AvisoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<UpdateAvisoRequest> for UpdateAvisoHandler {
    async fn handle(
        &self,
        request: UpdateAvisoRequest,
    ) -> Result<OperationResult<UpdateAvisoResponse>, AppError> {
        if self.repository.find_by_id(request.id).await?.is_none() {
            tracing::debug!(aviso_id = request.id, "Aviso not found for update");
            return Ok(OperationResult::NotFound);
        }

        let mensagem = request.mensagem.unwrap_or_default();
        // The record may have been deleted between the lookup and the write.
        let Some(aviso) = self.repository.update(request.id, &mensagem).await? else {
            return Ok(OperationResult::NotFound);
        };
        tracing::info!(aviso_id = aviso.id, "Aviso updated");

        Ok(OperationResult::Ok(UpdateAvisoResponse {
            mensagem: "Aviso atualizado com sucesso.".to_string(),
            aviso: UpdateAvisoDto::from(&aviso),
        }))
    }
}

pub struct DeleteAvisoHandler {
    repository: Arc<dyn AvisoRepository>,
}

impl DeleteAvisoHandler {
    pub fn new(repository: Arc<dyn AvisoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<DeleteAvisoRequest> for DeleteAvisoHandler {
    async fn handle(
        &self,
        request: DeleteAvisoRequest,
    ) -> Result<OperationResult<DeleteAvisoResponse>, AppError> {
        if !self.repository.soft_delete(request.id).await? {
            tracing::debug!(aviso_id = request.id, "Aviso not found for delete");
            return Ok(OperationResult::NotFound);
        }
        tracing::info!(aviso_id = request.id, "Aviso soft-deleted");

        Ok(OperationResult::Ok(DeleteAvisoResponse {
            mensagem: format!("Aviso {} deletado com sucesso!", request.id),
        }))
    }
}

pub struct GetAvisoHandler {
    repository: Arc<dyn AvisoRepository>,
}

impl GetAvisoHandler {
    pub fn new(repository: Arc<dyn AvisoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetAvisoRequest> for GetAvisoHandler {
    async fn handle(
        &self,
        request: GetAvisoRequest,
    ) -> Result<OperationResult<GetAvisoResponse>, AppError> {
        let outcome = match self.repository.find_by_id(request.id).await? {
            Some(aviso) => OperationResult::Ok(GetAvisoResponse::from(&aviso)),
            None => OperationResult::NotFound,
        };
        tracing::debug!(aviso_id = request.id, found = !outcome.is_not_found(), "Aviso lookup");
        Ok(outcome)
    }
}

pub struct GetAvisosHandler {
    repository: Arc<dyn AvisoRepository>,
}

impl GetAvisosHandler {
    pub fn new(repository: Arc<dyn AvisoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetAvisosRequest> for GetAvisosHandler {
    async fn handle(
        &self,
        _request: GetAvisosRequest,
    ) -> Result<OperationResult<Vec<GetAvisoResponse>>, AppError> {
        let avisos = self.repository.find_all().await?;
        tracing::debug!(count = avisos.len(), "Avisos listed");

        if avisos.is_empty() {
            return Ok(OperationResult::NoContent);
        }
        Ok(OperationResult::Ok(
            avisos.iter().map(GetAvisoResponse::from).collect(),
        ))
    }
}
