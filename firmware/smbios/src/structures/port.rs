//! Port Connector Information (type 8)

use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Decoded Port Connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConnector {
    pub handle: u16,
    pub internal_reference: String,
    pub internal_connector_type: u8,
    pub external_reference: String,
    pub external_connector_type: u8,
    pub port_type: u8,
}

impl PortConnector {
    pub fn internal_connector_label(&self) -> &'static str {
        labels::connector_type(self.internal_connector_type)
    }

    pub fn external_connector_label(&self) -> &'static str {
        labels::connector_type(self.external_connector_type)
    }

    pub fn port_type_label(&self) -> &'static str {
        labels::port_type(self.port_type)
    }
}

pub fn decode(s: &Structure<'_>) -> PortConnector {
    PortConnector {
        handle: s.handle(),
        internal_reference: s.string(0x04),
        internal_connector_type: s.byte(0x05),
        external_reference: s.string(0x06),
        external_connector_type: s.byte(0x07),
        port_type: s.byte(0x08),
    }
}
