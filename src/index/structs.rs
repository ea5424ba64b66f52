pub mod certificate_index;
