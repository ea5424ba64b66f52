/// Optional Sentry performance tracing.
pub mod sentry_tracing;
