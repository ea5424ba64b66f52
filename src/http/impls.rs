pub mod get_certificate_query;
