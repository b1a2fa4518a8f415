pub mod avisos;
pub mod health;
