use common::types::{CreatedResponse, MessageResponse};
use models::{validation::FieldError, Consultation, Pack, QuoteRequest};
use utoipa::OpenApi;

use crate::diagnostics::DiagnosticsReport;
use crate::errors::{ErrorBody, ValidationErrorBody};

#[derive(OpenApi)]
#[openapi(
    info(title = "Sponsorisily API", version = "1.0.0"),
    paths(
        crate::routes::meta::root,
        crate::routes::meta::hello,
        crate::routes::meta::diagnostics,
        crate::routes::packs::create_pack,
        crate::routes::packs::list_packs,
        crate::routes::leads::create_quote,
        crate::routes::leads::create_consultation,
    ),
    components(
        schemas(
            MessageResponse,
            CreatedResponse,
            DiagnosticsReport,
            Pack,
            QuoteRequest,
            Consultation,
            FieldError,
            ErrorBody,
            ValidationErrorBody,
        )
    ),
    tags(
        (name = "meta"),
        (name = "packs"),
        (name = "leads")
    )
)]
pub struct ApiDoc;
