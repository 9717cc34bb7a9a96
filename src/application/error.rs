use thiserror::Error;

use crate::domain::{AccountError, ParseCentsError};

/// Errors surfaced to the menu loop. Every variant is recoverable: the
/// loop prints the (Portuguese) message and re-prompts.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cliente não encontrado!")]
    ClientNotFound,

    #[error("Já existe cliente com esse CPF!")]
    DuplicateClient,

    #[error("Cliente não possui contas!")]
    NoAccounts,

    #[error("Data de nascimento inválida! Use o formato dd-mm-aaaa.")]
    InvalidDate,

    #[error("Valor informado inválido! Use o formato 100.00.")]
    MalformedAmount(#[from] ParseCentsError),

    #[error(transparent)]
    Account(#[from] AccountError),
}
