// ============================================================================
// MENSAJES DEL PROTOCOLO - Host (Streamlit) <-> Widget
// ============================================================================
// Salida: sobre `{ isStreamlitMessage: true, type, ...campos }`
// Entrada: solo `streamlit:render`, el resto se ignora
// ============================================================================

use serde::{Deserialize, Serialize};
use super::{Coordinate, RenderPayload};
use crate::utils::constants::{API_VERSION, DATA_TYPE_JSON};

/// Mensajes que el widget envía al host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady { api_version: u32 },

    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight { height: i32 },

    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue {
        value: Coordinate,
        data_type: &'static str,
    },
}

impl OutboundMessage {
    pub fn component_ready() -> Self {
        OutboundMessage::ComponentReady { api_version: API_VERSION }
    }

    pub fn frame_height(height: i32) -> Self {
        OutboundMessage::SetFrameHeight { height }
    }

    pub fn component_value(value: Coordinate) -> Self {
        OutboundMessage::SetComponentValue { value, data_type: DATA_TYPE_JSON }
    }

    pub fn envelope(&self) -> Envelope<'_> {
        Envelope { is_streamlit_message: true, message: self }
    }
}

/// Sobre que recibe `window.parent.postMessage`
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    #[serde(rename = "isStreamlitMessage")]
    pub is_streamlit_message: bool,
    #[serde(flatten)]
    pub message: &'a OutboundMessage,
}

/// Mensajes que llegan del host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    #[serde(rename = "streamlit:render")]
    Render { args: RenderArgs },

    #[serde(other)]
    Unknown,
}

/// `args` de un render; el host añade otros campos que no usamos
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderArgs {
    #[serde(default)]
    pub payload: Option<RenderPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_ready_envelope() {
        let msg = OutboundMessage::component_ready();
        let json = serde_json::to_value(msg.envelope()).unwrap();
        assert_eq!(
            json,
            json!({"isStreamlitMessage": true, "type": "streamlit:componentReady", "apiVersion": 1})
        );
    }

    #[test]
    fn test_frame_height_envelope() {
        let json = serde_json::to_value(OutboundMessage::frame_height(480).envelope()).unwrap();
        assert_eq!(
            json,
            json!({"isStreamlitMessage": true, "type": "streamlit:setFrameHeight", "height": 480})
        );
    }

    #[test]
    fn test_component_value_envelope() {
        let msg = OutboundMessage::component_value(Coordinate::new(40.0, -74.0));
        let json = serde_json::to_value(msg.envelope()).unwrap();
        assert_eq!(
            json,
            json!({
                "isStreamlitMessage": true,
                "type": "streamlit:setComponentValue",
                "value": [40.0, -74.0],
                "dataType": "json"
            })
        );
    }

    #[test]
    fn test_render_message_with_host_extras() {
        let msg: InboundMessage = serde_json::from_value(json!({
            "isStreamlitMessage": true,
            "type": "streamlit:render",
            "args": {
                "payload": {"lat": "51.5", "lon": "-0.1", "is_custom": true},
                "key": "map",
                "default": 0
            },
            "dataframeArgs": {},
            "disabled": false,
            "theme": {"base": "light"}
        }))
        .unwrap();

        let InboundMessage::Render { args } = msg else {
            panic!("expected render");
        };
        let payload = args.payload.unwrap();
        assert_eq!(payload.coordinate(), Some(Coordinate::new(51.5, -0.1)));
        assert!(payload.is_custom);
    }

    #[test]
    fn test_render_without_payload() {
        let msg: InboundMessage =
            serde_json::from_value(json!({"type": "streamlit:render", "args": {"payload": null}})).unwrap();
        assert_eq!(msg, InboundMessage::Render { args: RenderArgs { payload: None } });
    }

    #[test]
    fn test_other_types_are_unknown() {
        let msg: InboundMessage =
            serde_json::from_value(json!({"type": "webpackOk", "data": [1, 2]})).unwrap();
        assert_eq!(msg, InboundMessage::Unknown);
    }
}
