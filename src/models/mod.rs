pub mod aviso;
