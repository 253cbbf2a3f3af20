//! Handler bodies shared by the customer and driver scopes.
//!
//! Each runs under the per-request deadline; an abort leaves whatever
//! storage writes already happened in place.

use std::time::Duration;

use dj_core::domain::entities::Identity;
use dj_core::errors::DomainResult;
use dj_core::repositories::IdentityRepository;
use dj_core::services::auth::{AuthService, LoginOutcome};

use crate::dto::auth::{LoginData, LoginRequest, VerifyCodeData};
use crate::handlers::with_deadline;
use crate::routes::validate_body;
use crate::state::{DynCodeDelivery, DynCodeSource, DynCodeStore};

pub type DomainAuthService<I, R> =
    AuthService<I, R, DynCodeSource, DynCodeStore, DynCodeDelivery>;

pub async fn get_verify_code<I, R>(
    service: &DomainAuthService<I, R>,
    telephone: &str,
    deadline: Duration,
) -> DomainResult<VerifyCodeData>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    let issued = with_deadline(deadline, service.send_code(telephone)).await?;
    Ok(issued.into())
}

pub async fn login<I, R>(
    service: &DomainAuthService<I, R>,
    request: &LoginRequest,
    deadline: Duration,
) -> DomainResult<(LoginData, LoginOutcome<I>)>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    validate_body(request, Some(request.telephone.as_str()))?;
    let outcome = with_deadline(
        deadline,
        service.login(&request.telephone, &request.verify_code),
    )
    .await?;
    Ok((outcome.session.clone().into(), outcome))
}

pub async fn logout<I, R>(
    service: &DomainAuthService<I, R>,
    key: &I::Key,
    deadline: Duration,
) -> DomainResult<()>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    with_deadline(deadline, service.logout(key)).await
}
