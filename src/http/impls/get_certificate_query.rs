use actix_web::error::QueryPayloadError;
use actix_web::web;
use crate::http::structs::get_certificate_query::GetCertificateQuery;

pub const SERVER_NAME_PARAM: &str = "server_name";

impl GetCertificateQuery {
    /// A repeated `server_name` resolves to its first value.
    pub fn from_query_string(query_string: &str) -> Result<GetCertificateQuery, QueryPayloadError> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)?.into_inner();
        Ok(GetCertificateQuery {
            server_name: pairs
                .into_iter()
                .find(|(name, _)| name == SERVER_NAME_PARAM)
                .map(|(_, value)| value),
        })
    }
}
