pub mod certificate_error;
