use std::sync::Arc;

use addrbook_core::gateways::geocode::GeoCodingGateway;

pub struct GeoCoding(Arc<dyn GeoCodingGateway + Send + Sync>);

impl GeoCoding {
    pub fn new(gateway: Arc<dyn GeoCodingGateway + Send + Sync>) -> Self {
        Self(gateway)
    }

    /// A handle that can be moved onto a blocking thread.
    pub fn gateway(&self) -> Arc<dyn GeoCodingGateway + Send + Sync> {
        Arc::clone(&self.0)
    }
}

pub struct Version(pub &'static str);
