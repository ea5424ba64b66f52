/// Outbound read contract for storage sources.
pub mod storage_reader;
