use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Extension, FromRequest, Request},
    response::{Html, IntoResponse, Response},
};

use crate::graphql::{self, CatalogSchema};

pub async fn graphql_handler(
    Extension(schema): Extension<CatalogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GET on the endpoint: run the operation when the URL carries a `query`
/// parameter, otherwise serve the GraphiQL page.
pub async fn graphql_get(Extension(schema): Extension<CatalogSchema>, req: Request) -> Response {
    if !has_query_param(req.uri().query()) {
        return graphiql().await.into_response();
    }

    match <GraphQLRequest as FromRequest<()>>::from_request(req, &()).await {
        Ok(req) => GraphQLResponse::from(schema.execute(req.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

/// Interactive GraphiQL page pointed at the endpoint.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Schema document (SDL) as plain text.
pub async fn schema_sdl() -> String {
    graphql::sdl()
}

fn has_query_param(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair == "query" || pair.starts_with("query="))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_query_param() {
        assert!(has_query_param(Some("query={products{id}}")));
        assert!(has_query_param(Some("operationName=Q&query=%7Bproducts%7Bid%7D%7D")));
        assert!(!has_query_param(None));
        assert!(!has_query_param(Some("")));
        assert!(!has_query_param(Some("queryx=1&foo=query")));
    }
}
