pub mod avisos;
pub mod mediator;
pub mod validation;
