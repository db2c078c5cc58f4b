// src/middleware/rbac.rs
//
// Guardião de cargo. Diferente de um RBAC com consulta ao banco, aqui a
// decisão usa o retrato de cargos embutido no token: mudança de cargo só
// vale após novo login.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{common::error::AppError, domain::sessao, models::auth::Claims};

/// O trait que define uma área protegida por cargo.
pub trait CargoDef: Send + Sync + 'static {
    fn rotulo() -> &'static str;
    fn autorizado(cargos: &[String]) -> bool;
}

/// O extrator (guardião): `_: RequireCargo<Tesouraria>` num handler
/// exige um dos cargos da área.
pub struct RequireCargo<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireCargo<T>
where
    T: CargoDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or(AppError::TokenInvalido)?;

        if !T::autorizado(&claims.cargos) {
            return Err(AppError::AcessoNegado(T::rotulo()));
        }

        Ok(RequireCargo(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS ÁREAS
// ---

pub struct Tesouraria;
impl CargoDef for Tesouraria {
    fn rotulo() -> &'static str {
        "Tesouraria"
    }
    fn autorizado(cargos: &[String]) -> bool {
        sessao::autorizado_tesouraria(cargos)
    }
}

pub struct Secretaria;
impl CargoDef for Secretaria {
    fn rotulo() -> &'static str {
        "Secretaria"
    }
    fn autorizado(cargos: &[String]) -> bool {
        sessao::autorizado_secretaria(cargos)
    }
}
