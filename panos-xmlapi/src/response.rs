use quick_xml::events::Event;
use quick_xml::Reader;

use crate::session::ApiError;

/// Fields pulled out of a device API `<response>` envelope.
#[derive(Debug, Default)]
struct ApiResponse {
    status: Option<String>,
    code: Option<String>,
    key: Option<String>,
    messages: Vec<String>,
}

/// Check a device API response for success, surfacing the device-reported
/// error message otherwise.
pub fn check_status(xml: &[u8]) -> Result<(), ApiError> {
    let response = read_response(xml)?;
    ensure_success(&response)
}

/// Extract the API key from a `type=keygen` response.
pub fn parse_keygen(xml: &[u8]) -> Result<String, ApiError> {
    let response = read_response(xml)?;
    ensure_success(&response)?;
    response
        .key
        .ok_or_else(|| ApiError::Malformed("keygen response did not contain a key".to_string()))
}

fn ensure_success(response: &ApiResponse) -> Result<(), ApiError> {
    match response.status.as_deref() {
        Some("success") => Ok(()),
        Some(_) => Err(ApiError::Device {
            code: response
                .code
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            message: if response.messages.is_empty() {
                "no error message in response".to_string()
            } else {
                response.messages.join("; ")
            },
        }),
        None => Err(ApiError::Malformed(
            "response element missing status attribute".to_string(),
        )),
    }
}

fn read_response(xml: &[u8]) -> Result<ApiResponse, ApiError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut response = ApiResponse::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let tag = std::str::from_utf8(e.name().as_ref())?.to_string();
                if tag == "response" {
                    read_envelope_attrs(&e, &reader, &mut response)?;
                }
                stack.push(tag);
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"response" {
                    read_envelope_attrs(&e, &reader, &mut response)?;
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?.into_owned();
                if text.trim().is_empty() {
                    continue;
                }
                if stack.last().map(String::as_str) == Some("key") {
                    response.key = Some(text);
                } else if stack.iter().any(|tag| tag == "msg") {
                    response.messages.push(text);
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(response)
}

fn read_envelope_attrs(
    e: &quick_xml::events::BytesStart<'_>,
    reader: &Reader<&[u8]>,
    response: &mut ApiResponse,
) -> Result<(), ApiError> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();
        match key {
            "status" => response.status = Some(value),
            "code" => response.code = Some(value),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_status, parse_keygen};
    use crate::session::ApiError;

    #[test]
    fn accepts_success_response() {
        let xml = br#"<response status="success"><result/></response>"#;
        assert!(check_status(xml).is_ok());
    }

    #[test]
    fn surfaces_device_error_with_code_and_message() {
        let xml = br#"<response status="error" code="403"><result><msg>Invalid credentials.</msg></result></response>"#;
        let err = check_status(xml).expect_err("should fail");
        match err {
            ApiError::Device { code, message } => {
                assert_eq!(code, "403");
                assert_eq!(message, "Invalid credentials.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn joins_multi_line_error_messages() {
        let xml = br#"<response status="error"><msg><line>tunnel.1 already exists</line><line>object rejected</line></msg></response>"#;
        let err = check_status(xml).expect_err("should fail");
        assert!(err
            .to_string()
            .contains("tunnel.1 already exists; object rejected"));
    }

    #[test]
    fn extracts_keygen_key() {
        let xml =
            br#"<response status="success"><result><key>LUFRPT1abc==</key></result></response>"#;
        assert_eq!(parse_keygen(xml).expect("key"), "LUFRPT1abc==");
    }

    #[test]
    fn keygen_without_key_is_malformed() {
        let xml = br#"<response status="success"><result/></response>"#;
        let err = parse_keygen(xml).expect_err("should fail");
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn missing_status_is_malformed() {
        let xml = br#"<response><result/></response>"#;
        let err = check_status(xml).expect_err("should fail");
        assert!(matches!(err, ApiError::Malformed(_)));
    }
}
