use crate::{
    error::AppError,
    models::aviso::{
        CreateAvisoRequest, DeleteAvisoRequest, GetAvisoRequest, GetAvisosRequest,
        UpdateAvisoRequest,
    },
};

pub const ID_INVALIDO: &str = "O ID do aviso deve ser maior que zero.";
pub const TITULO_OBRIGATORIO: &str = "O título é obrigatório.";
pub const TITULO_VAZIO: &str = "O título não pode ser vazio.";
pub const MENSAGEM_OBRIGATORIA: &str = "A mensagem é obrigatória.";
pub const MENSAGEM_VAZIA: &str = "A mensagem não pode ser vazia.";

/// Input checks that run before a request reaches its handler.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn positive_id(id: i32) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::Validation(ID_INVALIDO.into()));
    }
    Ok(())
}

fn required_text(
    value: Option<&str>,
    missing: &'static str,
    blank: &'static str,
) -> Result<(), AppError> {
    match value {
        None => Err(AppError::Validation(missing.into())),
        Some(s) if s.trim().is_empty() => Err(AppError::Validation(blank.into())),
        Some(_) => Ok(()),
    }
}

impl Validate for CreateAvisoRequest {
    fn validate(&self) -> Result<(), AppError> {
        required_text(self.titulo.as_deref(), TITULO_OBRIGATORIO, TITULO_VAZIO)?;
        required_text(self.mensagem.as_deref(), MENSAGEM_OBRIGATORIA, MENSAGEM_VAZIA)
    }
}

impl Validate for UpdateAvisoRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive_id(self.id)?;
        required_text(self.mensagem.as_deref(), MENSAGEM_OBRIGATORIA, MENSAGEM_VAZIA)
    }
}

impl Validate for DeleteAvisoRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive_id(self.id)
    }
}

impl Validate for GetAvisoRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive_id(self.id)
    }
}

impl Validate for GetAvisosRequest {}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_ids_rejected() {
        assert_eq!(message(GetAvisoRequest { id: 0 }.validate()), ID_INVALIDO);
        assert_eq!(message(DeleteAvisoRequest { id: -3 }.validate()), ID_INVALIDO);
        assert!(GetAvisoRequest { id: 1 }.validate().is_ok());
    }

    #[test]
    fn test_create_requires_titulo_then_mensagem() {
        let req = CreateAvisoRequest { titulo: None, mensagem: None };
        assert_eq!(message(req.validate()), TITULO_OBRIGATORIO);

        let req = CreateAvisoRequest {
            titulo: Some("  ".into()),
            mensagem: Some("M".into()),
        };
        assert_eq!(message(req.validate()), TITULO_VAZIO);

        let req = CreateAvisoRequest {
            titulo: Some("T".into()),
            mensagem: Some(String::new()),
        };
        assert_eq!(message(req.validate()), MENSAGEM_VAZIA);

        let req = CreateAvisoRequest {
            titulo: Some("T".into()),
            mensagem: Some("M".into()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_checks_id_before_mensagem() {
        let req = UpdateAvisoRequest { id: 0, mensagem: None };
        assert_eq!(message(req.validate()), ID_INVALIDO);

        let req = UpdateAvisoRequest { id: 1, mensagem: None };
        assert_eq!(message(req.validate()), MENSAGEM_OBRIGATORIA);

        let req = UpdateAvisoRequest { id: 1, mensagem: Some("\n".into()) };
        assert_eq!(message(req.validate()), MENSAGEM_VAZIA);
    }

    #[test]
    fn test_get_all_has_no_rules() {
        assert!(GetAvisosRequest.validate().is_ok());
    }
}
