//! Request-scoped demo service

use std::hint::black_box;

use crate::config::ServiceSection;

/// Result returned by [`DemoService::needlessly_consume_resources`].
pub const RESOURCES_CONSUMED: &str = "Resources have been needlessly consumed.";

/// Placeholder service handed to handlers once per request.
///
/// Holds no shared state; a new instance is built for every request and
/// dropped when the handler returns.
#[derive(Debug, Clone)]
pub struct DemoService {
    scratch_bytes: usize,
}

impl DemoService {
    pub fn new(config: &ServiceSection) -> Self {
        Self {
            scratch_bytes: config.scratch_bytes,
        }
    }

    /// Fill and discard a scratch buffer, then report that it happened.
    pub fn needlessly_consume_resources(&self) -> String {
        let mut scratch = vec![0u8; self.scratch_bytes];
        for (i, byte) in scratch.iter_mut().enumerate() {
            *byte = i as u8;
        }
        black_box(&scratch);

        tracing::debug!(bytes = self.scratch_bytes, "Scratch buffer released");

        RESOURCES_CONSUMED.to_string()
    }
}

impl Default for DemoService {
    fn default() -> Self {
        Self::new(&ServiceSection::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_fixed_result() {
        let service = DemoService::default();
        assert_eq!(service.needlessly_consume_resources(), RESOURCES_CONSUMED);
        // Repeated calls are independent
        assert_eq!(service.needlessly_consume_resources(), RESOURCES_CONSUMED);
    }

    #[test]
    fn empty_scratch_buffer_is_fine() {
        let service = DemoService::new(&ServiceSection { scratch_bytes: 0 });
        assert_eq!(service.needlessly_consume_resources(), RESOURCES_CONSUMED);
    }
}
