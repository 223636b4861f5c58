use crate::library::logger::interface::{join_namespace, Logger};
use std::sync::Arc;

/// Forwards log lines to `tracing`, carrying the namespace as a field.
#[derive(Debug, Clone, Default)]
pub struct LoggerTracing {
    namespace: Option<String>,
}

impl LoggerTracing {
    pub fn new() -> Self {
        Self { namespace: None }
    }
}

impl Logger for LoggerTracing {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match &self.namespace {
            Some(namespace) => tracing::info!(namespace = %namespace, "{}", message),
            None => tracing::info!("{}", message),
        }
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match &self.namespace {
            Some(namespace) => tracing::error!(namespace = %namespace, "{}", message),
            None => tracing::error!("{}", message),
        }
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerTracing {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
        })
    }
}
