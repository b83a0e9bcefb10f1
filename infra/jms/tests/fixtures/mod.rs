use qpid_jms::DeserializationPolicy;

/// A policy that is not the default one, used to exercise the custom-policy paths.
#[derive(Debug, Clone)]
pub struct DenyAllPolicy;

impl DeserializationPolicy for DenyAllPolicy {
    fn is_trusted_type(&self, _type_name: &str) -> bool {
        false
    }

    fn copy(&self) -> Box<dyn DeserializationPolicy> {
        Box::new(self.clone())
    }
}
