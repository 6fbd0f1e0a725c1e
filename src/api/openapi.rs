//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use crate::api::dto::{CustomerDetailResponse, CustomerListResponse, ErrorResponse};
use crate::api::handlers::system::HealthResponse;
use crate::domain::{Customer, CustomerId};

/// OpenAPI documentation for the customer gateway.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Customer Gateway API",
        description = "Paginated listing and single-record lookup over the customer collection.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    tags(
        (name = "Customers", description = "Customer listing and lookup"),
        (name = "System", description = "Health check endpoints")
    ),
    paths(
        crate::api::handlers::customer::list_customers,
        crate::api::handlers::customer::get_customer,
        crate::api::handlers::customer::list_fake_customers,
        crate::api::handlers::system::health_handler
    ),
    components(
        schemas(
            Customer,
            CustomerId,
            CustomerListResponse,
            CustomerDetailResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
