use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::element::ConfigElement;

/// Errors that can occur while rendering a [`ConfigElement`] tree to XML.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to serialize XML bytes.
    #[error("failed to render element XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Serialized bytes were not valid UTF-8.
    #[error("rendered element was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize a [`ConfigElement`] tree into the compact XML string the
/// device API expects as the `element` request parameter.
pub fn render(element: &ConfigElement) -> Result<String, RenderError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &ConfigElement,
) -> Result<(), quick_xml::Error> {
    let mut start = BytesStart::new(element.tag.as_str());

    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render;
    use crate::element::ConfigElement;

    #[test]
    fn renders_nested_entry() {
        let entry = ConfigElement::entry("vr-1").child(
            ConfigElement::new("interface")
                .child(ConfigElement::text("member", "tunnel.1"))
                .child(ConfigElement::text("member", "tunnel.2")),
        );

        let xml = render(&entry).expect("render");
        assert_eq!(
            xml,
            r#"<entry name="vr-1"><interface><member>tunnel.1</member><member>tunnel.2</member></interface></entry>"#
        );
    }

    #[test]
    fn renders_empty_element_self_closed() {
        let element = ConfigElement::new("dynamic");
        assert_eq!(render(&element).expect("render"), "<dynamic/>");
    }

    #[test]
    fn escapes_text_content() {
        let element = ConfigElement::text("key", "a<b&c");
        assert_eq!(render(&element).expect("render"), "<key>a&lt;b&amp;c</key>");
    }
}
