pub mod certificate_record;
